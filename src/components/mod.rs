mod feedback;
mod header;
mod home;
mod inputs;
mod upload_modal;

pub use feedback::{ErrorView, Loading, Toaster};
pub use header::Header;
pub use home::HomeScreen;
pub use inputs::{FileInput, TextInput};
pub use upload_modal::UploadModal;
