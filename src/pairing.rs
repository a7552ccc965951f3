use std::collections::HashMap;

use tracing::debug;

/// Change to pairing state produced by one decode, applied by the decoder afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingUpdate {
    /// `tail` is the second half of a packed pair whose head is `head_len` bytes long.
    Record { tail: u32, head_len: u8 },
    /// A plain instruction ends at `tail`; whatever was recorded there is stale.
    Clear { tail: u32 },
}

/// Address-keyed record of tail halves: tail address -> head length.
#[derive(Debug, Clone, Default)]
pub struct PairingState {
    tails: HashMap<u32, u8>,
}

impl PairingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head_length_at(&self, tail: u32) -> Option<u8> {
        self.tails.get(&tail).copied()
    }

    pub fn record(&mut self, tail: u32, head_len: u8) {
        debug!(tail, head_len, "pair recorded");
        self.tails.insert(tail, head_len);
    }

    pub fn clear(&mut self, tail: u32) {
        if self.tails.remove(&tail).is_some() {
            debug!(tail, "pair cleared");
        }
    }

    pub fn apply(&mut self, update: PairingUpdate) {
        match update {
            PairingUpdate::Record { tail, head_len } => self.record(tail, head_len),
            PairingUpdate::Clear { tail } => self.clear(tail),
        }
    }

    /// Forgets every pair whose head starts at `head`.
    pub fn undo_pairing(&mut self, head: u32) {
        self.tails.retain(|&tail, &mut len| {
            let keep = tail.wrapping_sub(len as u32) != head;
            if !keep { debug!(head, tail, "pair undone"); }
            keep
        });
    }

    pub fn len(&self) -> usize {
        self.tails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_removes_by_head_address() {
        let mut st = PairingState::new();
        st.apply(PairingUpdate::Record { tail: 0x104, head_len: 4 });
        st.apply(PairingUpdate::Record { tail: 0x203, head_len: 3 });
        st.undo_pairing(0x100);
        assert_eq!(st.head_length_at(0x104), None);
        assert_eq!(st.head_length_at(0x203), Some(3));
        st.apply(PairingUpdate::Clear { tail: 0x203 });
        assert!(st.is_empty());
    }
}
