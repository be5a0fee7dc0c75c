//! Enrollment domain core.
//!
//! Coordinates carts, registration, drops/withdrawals, and transaction
//! views over four storage seams: the catalog, the seat inventory, the
//! transaction log, and the student directory. All rules that need a date
//! take an explicit `today`.

pub mod directory;
pub mod eligibility;
pub mod error;
pub mod policy;
pub mod service;
pub mod student;
pub mod view;

pub use directory::{InMemoryStudentDirectory, StudentDirectory};
pub use eligibility::SectionContext;
pub use error::{EnrollmentError, Rejection, Result};
pub use policy::EnrollmentPolicy;
pub use service::{EnrollmentService, ItemOutcome, RegistrationReport};
pub use student::Student;
pub use view::{TransactionView, display_action};
