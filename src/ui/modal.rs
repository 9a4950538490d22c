use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::forms::{FormKind, ModalController};
use crate::ui::board::MessageBoard;

/// The appointment dialog.
///
/// Shares its visibility with the message board so messages land inside the
/// dialog while it is open.
#[derive(Debug, Clone)]
pub struct AppointmentModal {
    open: Arc<AtomicBool>,
    board: MessageBoard,
}

impl AppointmentModal {
    pub fn attach(board: &MessageBoard) -> Self {
        Self {
            open: board.dialog_flag(),
            board: board.clone(),
        }
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
        tracing::debug!("Appointment dialog opened");
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Escape closes the dialog only when it is showing
    pub fn handle_escape(&self) {
        if self.is_open() {
            self.close();
        }
    }

    /// A click on the backdrop around the dialog
    pub fn handle_backdrop_click(&self) {
        self.close();
    }
}

impl ModalController for AppointmentModal {
    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
        self.board.clear_form(FormKind::Appointment);
        tracing::debug!("Appointment dialog closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{MessagePresenter, Severity};

    #[tokio::test]
    async fn test_close_clears_dialog_messages() {
        let board = MessageBoard::default();
        let modal = AppointmentModal::attach(&board);

        modal.open();
        board.display("Por favor, preencha o campo Nome.", Severity::Error);
        assert_eq!(board.current().unwrap().form, FormKind::Appointment);

        modal.close();
        assert!(!modal.is_open());
        assert!(board.current().is_none());
    }

    #[tokio::test]
    async fn test_close_keeps_contact_messages() {
        let board = MessageBoard::default();
        let modal = AppointmentModal::attach(&board);

        board.display("contato", Severity::Success);
        modal.handle_backdrop_click();
        assert_eq!(board.current().unwrap().form, FormKind::Contact);
    }

    #[test]
    fn test_escape_only_acts_when_open() {
        let board = MessageBoard::default();
        let modal = AppointmentModal::attach(&board);

        modal.handle_escape();
        assert!(!modal.is_open());

        modal.open();
        assert!(modal.is_open());
        modal.handle_escape();
        assert!(!modal.is_open());
    }
}
