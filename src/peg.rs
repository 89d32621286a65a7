use crate::error::PegError;

/// A labelled stack of disks. Widths strictly decrease from bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    label: char,
    disks: Vec<u32>,
}

impl Peg {
    pub fn new(label: char) -> Self {
        Self {
            label,
            disks: Vec::new(),
        }
    }

    pub fn label(&self) -> char {
        self.label
    }

    /// Puts a disk on top. Refuses a disk at least as wide as the current top.
    pub fn push(&mut self, disk: u32) -> Result<(), PegError> {
        if let Some(top) = self.top() {
            if disk >= top {
                return Err(PegError::Oversized {
                    label: self.label,
                    disk,
                    top,
                });
            }
        }
        self.disks.push(disk);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u32, PegError> {
        self.disks
            .pop()
            .ok_or(PegError::Empty { label: self.label })
    }

    pub fn top(&self) -> Option<u32> {
        self.disks.last().copied()
    }

    /// Width of the disk at `index`, counting from the bottom.
    pub fn width_at(&self, index: usize) -> Result<u32, PegError> {
        self.disks
            .get(index)
            .copied()
            .ok_or(PegError::OutOfRange {
                label: self.label,
                index,
                len: self.disks.len(),
            })
    }

    /// Dashes as wide as the disk at `index`.
    pub fn disk_glyph(&self, index: usize) -> Result<String, PegError> {
        let width = self.width_at(index)?;
        Ok("-".repeat(width as usize))
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn clear(&mut self) {
        self.disks.clear();
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[u32] {
        &self.disks
    }
}
