//! The cart and registration manager.

use std::collections::HashMap;
use std::sync::Arc;

use catalog::{Catalog, Section, SemesterStatus};
use chrono::NaiveDate;
use common::{CourseId, SectionId, StudentId};
use seats::{SeatError, SeatInventory};
use tokio::sync::Mutex;
use txn_log::{AppendOptions, SequenceNumber, Transaction, TransactionAction, TransactionLog};

use crate::directory::StudentDirectory;
use crate::eligibility::{self, SectionContext};
use crate::error::{EnrollmentError, Rejection, Result};
use crate::policy::EnrollmentPolicy;
use crate::student::Student;
use crate::view::TransactionView;

/// Outcome of one cart item during a registration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The section was registered; `remaining_seats` after allocation.
    Registered { remaining_seats: u32 },

    /// The item was refused by an enrollment rule.
    Rejected(Rejection),

    /// A transient or infrastructure failure; the item may be retried.
    Failed { reason: String },
}

impl ItemOutcome {
    /// Returns true for the `Registered` outcome.
    pub fn is_registered(&self) -> bool {
        matches!(self, ItemOutcome::Registered { .. })
    }
}

/// Per-item report returned by [`EnrollmentService::register_cart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    pub section_id: SectionId,
    pub course_id: CourseId,
    pub outcome: ItemOutcome,
}

/// Service coordinating carts, registration, drops, and transaction views.
///
/// Generic over the four storage seams so tests can substitute doubles for
/// any of them. Operations on one student are serialized through a lock
/// map; operations on different students proceed in parallel.
pub struct EnrollmentService<C, S, L, D> {
    catalog: C,
    seats: S,
    log: L,
    directory: D,
    policy: EnrollmentPolicy,
    student_locks: Mutex<HashMap<StudentId, Arc<Mutex<()>>>>,
}

impl<C, S, L, D> EnrollmentService<C, S, L, D>
where
    C: Catalog,
    S: SeatInventory,
    L: TransactionLog,
    D: StudentDirectory,
{
    /// Creates a service with the default policy.
    pub fn new(catalog: C, seats: S, log: L, directory: D) -> Self {
        Self::with_policy(catalog, seats, log, directory, EnrollmentPolicy::default())
    }

    /// Creates a service with an explicit policy.
    pub fn with_policy(
        catalog: C,
        seats: S,
        log: L,
        directory: D,
        policy: EnrollmentPolicy,
    ) -> Self {
        Self {
            catalog,
            seats,
            log,
            directory,
            policy,
            student_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The active enrollment policy.
    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    /// Creates an empty enrollment record for a student. Idempotent: an
    /// existing record is left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn admit(&self, student_id: StudentId) -> Result<()> {
        let lock = self.student_lock(student_id).await;
        let _guard = lock.lock().await;

        if self.directory.get(student_id).await?.is_some() {
            return Ok(());
        }
        self.directory.save(Student::new(student_id)).await?;
        metrics::counter!("students_admitted").increment(1);
        Ok(())
    }

    /// Adds a section to the student's cart.
    ///
    /// Gate order: registration checks (prereq, started), open-seat
    /// precheck, then cart checks. A rejection leaves the cart unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        student_id: StudentId,
        section_id: SectionId,
        today: NaiveDate,
    ) -> Result<()> {
        let lock = self.student_lock(student_id).await;
        let _guard = lock.lock().await;

        let mut student = self.load_student(student_id).await?;
        let candidate = self.resolve(section_id).await?;
        let cart = self.resolve_all(student.cart().to_vec()).await?;
        let registered = self.resolve_registered(&student).await?;

        eligibility::check_registration(&candidate, &registered, today)?;
        if self.seats.available(section_id).await? == 0 {
            return Err(Rejection::NoSeats(section_id).into());
        }
        eligibility::check_cart_add(&candidate, &cart, &registered, today)?;

        student.add_to_cart(section_id);
        self.directory.save(student).await?;
        metrics::counter!("cart_adds").increment(1);
        Ok(())
    }

    /// Removes a section from the cart.
    #[tracing::instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        student_id: StudentId,
        section_id: SectionId,
    ) -> Result<()> {
        let lock = self.student_lock(student_id).await;
        let _guard = lock.lock().await;

        let mut student = self.load_student(student_id).await?;
        if !student.remove_from_cart(section_id) {
            return Err(Rejection::NotInCart(section_id).into());
        }
        self.directory.save(student).await?;
        Ok(())
    }

    /// Registers the entire cart, reporting a per-item outcome.
    ///
    /// The whole cart is checked against the credit cap first; an overload
    /// fails the operation with no mutation and the cart intact. The
    /// per-item pass then runs each item independently, and the cart is
    /// cleared unconditionally at the end of the pass.
    #[tracing::instrument(skip(self))]
    pub async fn register_cart(
        &self,
        student_id: StudentId,
        today: NaiveDate,
    ) -> Result<Vec<RegistrationReport>> {
        metrics::counter!("cart_registrations_total").increment(1);
        let pass_start = std::time::Instant::now();

        let lock = self.student_lock(student_id).await;
        let _guard = lock.lock().await;

        let mut student = self.load_student(student_id).await?;
        if student.cart().is_empty() {
            return Err(Rejection::EmptyCart.into());
        }

        let cart = self.resolve_all(student.cart().to_vec()).await?;
        let mut registered = self.resolve_registered(&student).await?;

        eligibility::check_credit_load(&cart, &registered, self.policy.credit_cap)?;

        let mut sequence = self
            .log
            .latest_sequence(student_id)
            .await?
            .unwrap_or(SequenceNumber::initial());

        let mut reports = Vec::with_capacity(cart.len());
        for candidate in cart {
            let section_id = candidate.section.id;
            let course_id = candidate.course.id.clone();
            let outcome = self
                .register_one(&mut student, &mut registered, &mut sequence, candidate, today)
                .await;
            reports.push(RegistrationReport {
                section_id,
                course_id,
                outcome,
            });
        }

        student.clear_cart();
        self.directory.save(student).await?;

        let duration = pass_start.elapsed().as_secs_f64();
        metrics::histogram!("register_cart_duration_seconds").record(duration);
        tracing::info!(%student_id, items = reports.len(), "cart registration pass complete");
        Ok(reports)
    }

    /// Drops an upcoming registration or withdraws from one in session.
    ///
    /// Returns the action recorded. A section whose semester has ended is
    /// no longer an active registration and cannot be dropped.
    #[tracing::instrument(skip(self))]
    pub async fn drop_or_withdraw(
        &self,
        student_id: StudentId,
        section_id: SectionId,
        today: NaiveDate,
    ) -> Result<TransactionAction> {
        let lock = self.student_lock(student_id).await;
        let _guard = lock.lock().await;

        let mut student = self.load_student(student_id).await?;
        if !student.is_registered(section_id) {
            return Err(Rejection::NotRegistered(section_id).into());
        }

        let context = self.resolve(section_id).await?;
        let action = match context.semester.status(today) {
            SemesterStatus::Upcoming => TransactionAction::Drop,
            SemesterStatus::InSession => TransactionAction::Withdraw,
            SemesterStatus::Ended => {
                return Err(Rejection::NotRegistered(section_id).into());
            }
        };

        // Seat restitution first: a counter fault aborts with no mutation.
        self.seats.free(section_id).await?;

        student.remove_registration(section_id);
        self.directory.save(student).await?;

        let sequence = self
            .log
            .latest_sequence(student_id)
            .await?
            .unwrap_or(SequenceNumber::initial());
        let txn = Transaction::builder()
            .student_id(student_id)
            .course_id(context.course.id.clone())
            .section_id(section_id)
            .semester(context.section.semester.clone())
            .action(action)
            .sequence(sequence.next())
            .build();
        self.log
            .append(vec![txn], AppendOptions::expect_sequence(sequence))
            .await?;

        metrics::counter!("sections_dropped").increment(1);
        Ok(action)
    }

    /// The student's cart, resolved to sections in insertion order.
    pub async fn cart(&self, student_id: StudentId) -> Result<Vec<Section>> {
        let student = self.load_student(student_id).await?;
        let mut sections = Vec::with_capacity(student.cart().len());
        for id in student.cart() {
            sections.push(self.catalog.section(*id).await?);
        }
        Ok(sections)
    }

    /// The student's registered sections, ordered by section ID.
    pub async fn registered(&self, student_id: StudentId) -> Result<Vec<Section>> {
        let student = self.load_student(student_id).await?;
        let mut ids: Vec<_> = student.registered().iter().copied().collect();
        ids.sort();
        let mut sections = Vec::with_capacity(ids.len());
        for id in ids {
            sections.push(self.catalog.section(id).await?);
        }
        Ok(sections)
    }

    /// The student's transaction history with derived display actions.
    ///
    /// A Register entry whose semester has ended displays as Complete. The
    /// optional filter applies to the derived action, so filtering on
    /// Complete finds exactly the finished registrations.
    #[tracing::instrument(skip(self))]
    pub async fn transaction_log(
        &self,
        student_id: StudentId,
        action_filter: Option<TransactionAction>,
        today: NaiveDate,
    ) -> Result<Vec<TransactionView>> {
        let entries = self.log.get_for_student(student_id).await?;
        let mut views = Vec::with_capacity(entries.len());
        for txn in &entries {
            let semester = self.catalog.semester(&txn.semester).await?;
            let view = TransactionView::from_transaction(txn, semester.status(today));
            if action_filter.is_none_or(|a| a == view.action) {
                views.push(view);
            }
        }
        Ok(views)
    }

    async fn register_one(
        &self,
        student: &mut Student,
        registered: &mut Vec<SectionContext>,
        sequence: &mut SequenceNumber,
        candidate: SectionContext,
        today: NaiveDate,
    ) -> ItemOutcome {
        let section_id = candidate.section.id;

        if let Err(rejection) = eligibility::check_retake(&candidate, registered, today) {
            return ItemOutcome::Rejected(rejection);
        }
        if let Err(rejection) = eligibility::check_registration(&candidate, registered, today) {
            return ItemOutcome::Rejected(rejection);
        }

        let remaining = match self.allocate_with_retry(section_id).await {
            Ok(remaining) => remaining,
            Err(SeatError::AtCapacity(_)) => {
                return ItemOutcome::Rejected(Rejection::NoSeats(section_id));
            }
            Err(e) => {
                return ItemOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let next = sequence.next();
        let txn = Transaction::builder()
            .student_id(student.id())
            .course_id(candidate.course.id.clone())
            .section_id(section_id)
            .semester(candidate.section.semester.clone())
            .action(TransactionAction::Register)
            .sequence(next)
            .build();
        if let Err(e) = self
            .log
            .append(vec![txn], AppendOptions::expect_sequence(*sequence))
            .await
        {
            // Return the seat; the item failed without registering.
            let _ = self.seats.free(section_id).await;
            return ItemOutcome::Failed {
                reason: e.to_string(),
            };
        }

        *sequence = next;
        student.add_registration(section_id);
        registered.push(candidate);
        metrics::counter!("sections_registered").increment(1);
        ItemOutcome::Registered {
            remaining_seats: remaining,
        }
    }

    async fn allocate_with_retry(
        &self,
        section_id: SectionId,
    ) -> std::result::Result<u32, SeatError> {
        let mut delay = self.policy.retry_base_delay;
        let mut attempt: u32 = 0;
        loop {
            match self.seats.allocate(section_id).await {
                Err(SeatError::Conflict(_)) if attempt + 1 < self.policy.seat_retry_attempts => {
                    attempt += 1;
                    tracing::debug!(%section_id, attempt, "seat allocation conflict, retrying");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                other => return other,
            }
        }
    }

    async fn student_lock(&self, student_id: StudentId) -> Arc<Mutex<()>> {
        let mut locks = self.student_locks.lock().await;
        locks.entry(student_id).or_default().clone()
    }

    async fn load_student(&self, student_id: StudentId) -> Result<Student> {
        self.directory
            .get(student_id)
            .await?
            .ok_or(EnrollmentError::StudentNotFound(student_id))
    }

    async fn resolve(&self, section_id: SectionId) -> Result<SectionContext> {
        let section = self.catalog.section(section_id).await?;
        let course = self.catalog.course(&section.course_id).await?;
        let semester = self.catalog.semester(&section.semester).await?;
        Ok(SectionContext::new(section, course, semester))
    }

    async fn resolve_all(
        &self,
        ids: impl IntoIterator<Item = SectionId>,
    ) -> Result<Vec<SectionContext>> {
        let mut contexts = Vec::new();
        for id in ids {
            contexts.push(self.resolve(id).await?);
        }
        Ok(contexts)
    }

    async fn resolve_registered(&self, student: &Student) -> Result<Vec<SectionContext>> {
        let mut ids: Vec<_> = student.registered().iter().copied().collect();
        ids.sort();
        self.resolve_all(ids).await
    }
}
