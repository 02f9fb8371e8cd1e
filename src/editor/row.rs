/// Width of a tab stop in display cells.
pub const TAB_STOP: usize = 8;

/// One line of text: the bytes as typed plus their on-screen form.
///
/// `render` is rebuilt after every mutation of `raw`, so it never goes
/// stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        let mut row = Self {
            raw: raw.into(),
            render: Vec::new(),
        };
        row.update_render();
        row
    }

    /// Logical content, without line terminator.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Display content with tabs expanded to spaces.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length in logical characters.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Length in display cells.
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Render column of logical column `cx`.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.raw
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| advance(rx, byte))
    }

    /// First logical column whose render column is at or past `rx`.
    ///
    /// Render positions inside an expanded tab map to the character after
    /// the tab; positions past the end map to `len()`.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &byte) in self.raw.iter().enumerate() {
            if cur_rx >= rx {
                return cx;
            }
            cur_rx = advance(cur_rx, byte);
        }
        self.raw.len()
    }

    pub(super) fn insert(&mut self, at: usize, byte: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update_render();
    }

    pub(super) fn remove(&mut self, at: usize) -> Option<u8> {
        if at >= self.raw.len() {
            return None;
        }
        let byte = self.raw.remove(at);
        self.update_render();
        Some(byte)
    }

    pub(super) fn append(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
        self.update_render();
    }

    /// Cut the row at `at`, returning the suffix.
    pub(super) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update_render();
        tail
    }

    fn update_render(&mut self) {
        self.render.clear();
        for &byte in &self.raw {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
    }
}

const fn advance(rx: usize, byte: u8) -> usize {
    if byte == b'\t' {
        rx + TAB_STOP - rx % TAB_STOP
    } else {
        rx + 1
    }
}
