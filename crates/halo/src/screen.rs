//! Terminal capabilities the animation needs.

use color_eyre::Result;
use ratatui::{Terminal, backend::Backend, layout::Size, text::Line, widgets::Paragraph};

/// The terminal as seen by the frame compositor.
pub trait Screen {
    /// Current size in cells, or `None` when it cannot be determined.
    fn size(&self) -> Option<Size>;

    /// Blank the whole visible area.
    fn clear(&mut self) -> Result<()>;

    /// Replace the visible area with `lines`, one per row from the top.
    fn paint(&mut self, lines: Vec<Line<'static>>) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;
}

impl<B> Screen for Terminal<B>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    fn size(&self) -> Option<Size> {
        Terminal::size(self).ok()
    }

    fn clear(&mut self) -> Result<()> {
        Terminal::clear(self)?;
        Ok(())
    }

    fn paint(&mut self, lines: Vec<Line<'static>>) -> Result<()> {
        // ratatui diffs against the previous frame, so cells not covered by
        // `lines` end up blank just as after a full clear
        self.draw(|frame| frame.render_widget(Paragraph::new(lines), frame.area()))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.show_cursor()?;
        } else {
            self.hide_cursor()?;
        }
        Ok(())
    }
}


/// In-memory screen for driving the compositor and the main loop in tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use color_eyre::eyre::eyre;

    use super::*;

    /// Records what was painted and the cursor and clear state.
    pub struct FakeScreen {
        pub size: Option<Size>,
        pub painted: Vec<Vec<Line<'static>>>,
        pub cursor_visible: bool,
        pub clears: usize,
        /// Make every paint fail.
        pub fail_paint: bool,
        /// Flag raised after each paint, as a signal handler would.
        pub raise_on_paint: Option<Arc<AtomicBool>>,
    }

    impl Default for FakeScreen {
        fn default() -> Self {
            Self {
                size: None,
                painted: Vec::new(),
                cursor_visible: true,
                clears: 0,
                fail_paint: false,
                raise_on_paint: None,
            }
        }
    }

    impl Screen for FakeScreen {
        fn size(&self) -> Option<Size> {
            self.size
        }

        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn paint(&mut self, lines: Vec<Line<'static>>) -> Result<()> {
            if self.fail_paint {
                return Err(eyre!("screen went away"));
            }
            self.painted.push(lines);
            if let Some(flag) = &self.raise_on_paint {
                flag.store(true, Ordering::SeqCst);
            }
            Ok(())
        }

        fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
            self.cursor_visible = visible;
            Ok(())
        }
    }
}
