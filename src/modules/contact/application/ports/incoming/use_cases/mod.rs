mod submit_contact;

pub use submit_contact::{
    ContactAck, ContactSubmission, SubmitContactError, SubmitContactUseCase,
};
