//! Two-phase confirmation for destructive actions.

/// A pending request awaiting an explicit confirm or decline.
///
/// Requesting again replaces the pending target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    prompt: &'static str,
    pending: Option<T>,
}

impl<T> Confirmation<T> {
    pub fn new(prompt: &'static str) -> Self {
        Self {
            prompt,
            pending: None,
        }
    }

    pub fn request(&mut self, target: T) {
        self.pending = Some(target);
    }

    /// The question to show while a request is pending.
    pub fn prompt(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|_| self.prompt)
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept the request, handing back its target.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn decline(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_yields_target_once() {
        let mut c = Confirmation::new("Excluir?");
        assert_eq!(c.prompt(), None);

        c.request(7);
        assert_eq!(c.prompt(), Some("Excluir?"));
        assert_eq!(c.pending(), Some(&7));
        assert_eq!(c.confirm(), Some(7));
        assert_eq!(c.confirm(), None);
    }

    #[test]
    fn decline_discards_target() {
        let mut c = Confirmation::new("Sair?");
        c.request(());
        c.decline();
        assert!(!c.is_pending());
        assert_eq!(c.confirm(), None);
    }

    #[test]
    fn new_request_replaces_pending() {
        let mut c = Confirmation::new("Excluir?");
        c.request(1);
        c.request(2);
        assert_eq!(c.confirm(), Some(2));
    }
}
