//! Virtual list navigation trait

/// Cursor navigation over a variable-length list.
///
/// Implementors provide length and cursor storage; the trait supplies the
/// movement operations so the list view and the app state agree on
/// wrapping and clamping behavior.
pub trait VirtualList {
    /// Get the total length of the virtual list
    fn virtual_len(&self) -> usize;

    /// Get the current cursor position
    fn cursor(&self) -> usize;

    /// Set the cursor to a specific position
    fn set_cursor(&mut self, pos: usize);

    /// Move cursor up by one position, wrapping to bottom if at top
    ///
    /// Returns true if the cursor moved
    fn move_up(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        if current > 0 {
            self.set_cursor(current - 1);
        } else {
            self.set_cursor(len.saturating_sub(1));
        }
        true
    }

    /// Move cursor down by one position, wrapping to top if at bottom
    ///
    /// Returns true if the cursor moved
    fn move_down(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let max = len.saturating_sub(1);
        let current = self.cursor();
        if current < max {
            self.set_cursor(current + 1);
        } else {
            self.set_cursor(0);
        }
        true
    }

    /// Move to the top of the list
    fn goto_top(&mut self) {
        self.set_cursor(0);
    }

    /// Move to the bottom of the list
    fn goto_bottom(&mut self) {
        let max = self.virtual_len().saturating_sub(1);
        self.set_cursor(max);
    }

    /// Ensure cursor is within valid bounds
    ///
    /// Needed after the list shrinks (delete, edit-collapse)
    fn clamp_cursor(&mut self) {
        let max = self.virtual_len().saturating_sub(1);
        if self.cursor() > max {
            self.set_cursor(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockList {
        len: usize,
        cursor: usize,
    }

    impl VirtualList for MockList {
        fn virtual_len(&self) -> usize {
            self.len
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, pos: usize) {
            self.cursor = pos.min(self.len.saturating_sub(1));
        }
    }

    #[test]
    fn test_move_up_wraps() {
        let mut list = MockList { len: 5, cursor: 2 };
        assert!(list.move_up());
        assert_eq!(list.cursor(), 1);

        let mut list = MockList { len: 5, cursor: 0 };
        assert!(list.move_up());
        assert_eq!(list.cursor(), 4);
    }

    #[test]
    fn test_move_down_wraps() {
        let mut list = MockList { len: 5, cursor: 2 };
        assert!(list.move_down());
        assert_eq!(list.cursor(), 3);

        let mut list = MockList { len: 5, cursor: 4 };
        assert!(list.move_down());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_goto_top_bottom() {
        let mut list = MockList { len: 5, cursor: 2 };
        list.goto_top();
        assert_eq!(list.cursor(), 0);

        list.goto_bottom();
        assert_eq!(list.cursor(), 4);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut list = MockList { len: 5, cursor: 4 };
        list.len = 2;
        list.clamp_cursor();
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut list = MockList { len: 0, cursor: 0 };
        assert!(!list.move_down());
        assert!(!list.move_up());
        list.clamp_cursor();
        assert_eq!(list.cursor(), 0);
    }
}
