// In-memory collaborators for the form workflow: the form surface, the
// message board and the appointment dialog.

pub mod board;
pub mod modal;
pub mod surface;

pub use board::{MessageBoard, PlacedMessage, DEFAULT_DISMISS_AFTER};
pub use modal::AppointmentModal;
pub use surface::FormSurface;
