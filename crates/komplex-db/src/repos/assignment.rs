//! Assignment repository with submit and grade transitions.
//!
//! Assignment status is a single value per assignment, not per student: one
//! student's submission marks the assignment submitted for everyone.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use komplex_core::entities::Assignment;
use komplex_core::enums::{AssignmentStatus, EntityType, TrailOp};
use komplex_core::errors::CoreError;
use komplex_core::grading::validate_percentage;
use komplex_core::ids::PREFIX_ASSIGNMENT;
use komplex_core::trail::CATALOG_ACTOR;

use crate::error::DatabaseError;
use crate::service::KomplexService;
use crate::updates::assignment::AssignmentUpdate;

/// Input for [`KomplexService::create_assignment`].
#[derive(Debug, Clone, Serialize)]
pub struct NewAssignment {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub points: u32,
    pub instructions: Option<String>,
}

impl KomplexService {
    pub(crate) fn read_assignments(&self) -> Vec<Assignment> {
        self.db().read_list(&self.db().keys().assignments())
    }

    fn write_assignments(&mut self, assignments: &[Assignment]) -> Result<(), DatabaseError> {
        let key = self.db().keys().assignments();
        self.db_mut().write_list(&key, assignments)
    }

    /// Create a pending assignment.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn create_assignment(&mut self, new: NewAssignment) -> Result<Assignment, DatabaseError> {
        let assignment = Assignment {
            id: self.db().generate_id(PREFIX_ASSIGNMENT)?,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            due_date: new.due_date,
            points: new.points,
            instructions: new.instructions,
            status: AssignmentStatus::Pending,
            grade: None,
            created_at: Utc::now(),
        };
        let mut assignments = self.read_assignments();
        assignments.push(assignment.clone());
        self.write_assignments(&assignments)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Create,
            EntityType::Assignment,
            &assignment.id,
            &assignment,
        );
        self.catalog_changed(&assignment.course_id)?;
        Ok(assignment)
    }

    #[must_use]
    pub fn get_assignment(&self, id: &str) -> Option<Assignment> {
        self.read_assignments().into_iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn list_assignments(&self, course_id: &str) -> Vec<Assignment> {
        self.read_assignments()
            .into_iter()
            .filter(|a| a.course_id == course_id)
            .collect()
    }

    /// Apply a partial update. Returns `None` for an unknown assignment.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn update_assignment(
        &mut self,
        id: &str,
        update: &AssignmentUpdate,
    ) -> Result<Option<Assignment>, DatabaseError> {
        let mut assignments = self.read_assignments();
        let Some(assignment) = assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if update.is_empty() {
            return Ok(Some(assignment.clone()));
        }
        update.apply(assignment);
        let updated = assignment.clone();
        self.write_assignments(&assignments)?;

        self.record(CATALOG_ACTOR, TrailOp::Update, EntityType::Assignment, id, update);
        Ok(Some(updated))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn delete_assignment(&mut self, id: &str) -> Result<bool, DatabaseError> {
        let mut assignments = self.read_assignments();
        let Some(pos) = assignments.iter().position(|a| a.id == id) else {
            return Ok(false);
        };
        let removed = assignments.remove(pos);
        self.write_assignments(&assignments)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Delete,
            EntityType::Assignment,
            id,
            &serde_json::json!({ "course_id": removed.course_id }),
        );
        self.catalog_changed(&removed.course_id)?;
        Ok(true)
    }

    /// Submit an assignment on behalf of `student_id`.
    ///
    /// A pending assignment becomes submitted. An assignment already
    /// submitted or graded keeps its status. Status is shared, so either way
    /// every enrolled student's progress is recomputed and the notifier fires. Returns `None` for an
    /// unknown assignment.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn submit_assignment(
        &mut self,
        id: &str,
        student_id: &str,
    ) -> Result<Option<Assignment>, DatabaseError> {
        let mut assignments = self.read_assignments();
        let Some(assignment) = assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        let from = assignment.status;
        if from.can_transition_to(AssignmentStatus::Submitted) {
            assignment.status = AssignmentStatus::Submitted;
        }
        let submitted = assignment.clone();
        if submitted.status != from {
            self.write_assignments(&assignments)?;
            self.record(
                student_id,
                TrailOp::Transition,
                EntityType::Assignment,
                id,
                &serde_json::json!({ "from": from, "to": submitted.status }),
            );
            tracing::info!(assignment_id = id, student_id, "assignment submitted");
        }

        self.recompute_course_progress(&submitted.course_id)?;
        self.notify_progress();
        Ok(Some(submitted))
    }

    /// Record a grade. The assignment must be submitted or already graded.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a grade above 100,
    /// `CoreError::InvalidTransition` for a pending assignment, or
    /// `DatabaseError` if the store write fails.
    pub fn grade_assignment(
        &mut self,
        id: &str,
        grade: u8,
    ) -> Result<Option<Assignment>, DatabaseError> {
        validate_percentage("grade", grade)?;

        let mut assignments = self.read_assignments();
        let Some(assignment) = assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        let from = assignment.status;
        if from == AssignmentStatus::Pending {
            return Err(CoreError::InvalidTransition {
                entity_type: EntityType::Assignment.to_string(),
                id: id.to_string(),
                from: from.to_string(),
                to: AssignmentStatus::Graded.to_string(),
            }
            .into());
        }
        assignment.status = AssignmentStatus::Graded;
        assignment.grade = Some(grade);
        let graded = assignment.clone();
        self.write_assignments(&assignments)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Transition,
            EntityType::Assignment,
            id,
            &serde_json::json!({ "from": from, "to": graded.status, "grade": grade }),
        );
        Ok(Some(graded))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::test_support::helpers::{new_assignment, test_service};
    use crate::updates::assignment::AssignmentUpdateBuilder;
    use komplex_core::enums::AssignmentStatus;
    use komplex_core::errors::CoreError;
    use pretty_assertions::assert_eq;

    #[test]
    fn created_assignment_is_pending() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();
        assert_eq!(a.status, AssignmentStatus::Pending);
        assert_eq!(svc.list_assignments("crs-1"), vec![a]);
    }

    #[test]
    fn submit_then_grade() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();

        let submitted = svc.submit_assignment(&a.id, "stu-1").unwrap().unwrap();
        assert_eq!(submitted.status, AssignmentStatus::Submitted);

        let graded = svc.grade_assignment(&a.id, 95).unwrap().unwrap();
        assert_eq!(graded.status, AssignmentStatus::Graded);
        assert_eq!(graded.grade, Some(95));

        let regraded = svc.grade_assignment(&a.id, 90).unwrap().unwrap();
        assert_eq!(regraded.grade, Some(90));
    }

    #[test]
    fn resubmitting_graded_keeps_status() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();
        svc.submit_assignment(&a.id, "stu-1").unwrap();
        svc.grade_assignment(&a.id, 80).unwrap();

        let again = svc.submit_assignment(&a.id, "stu-2").unwrap().unwrap();
        assert_eq!(again.status, AssignmentStatus::Graded);
        assert_eq!(again.grade, Some(80));
    }

    #[test]
    fn grading_pending_is_rejected() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();
        let err = svc.grade_assignment(&a.id, 50).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn grade_above_hundred_is_rejected() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();
        svc.submit_assignment(&a.id, "stu-1").unwrap();
        let err = svc.grade_assignment(&a.id, 101).unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn unknown_assignment_is_none() {
        let mut svc = test_service();
        assert!(svc.submit_assignment("asg-x", "stu-1").unwrap().is_none());
        assert!(svc.grade_assignment("asg-x", 10).unwrap().is_none());
        assert!(!svc.delete_assignment("asg-x").unwrap());
    }

    #[test]
    fn update_clears_optional_fields() {
        let mut svc = test_service();
        let a = svc.create_assignment(new_assignment("crs-1", "Essay")).unwrap();
        let update = AssignmentUpdateBuilder::new()
            .points(50)
            .instructions(None)
            .build();
        let updated = svc.update_assignment(&a.id, &update).unwrap().unwrap();
        assert_eq!(updated.points, 50);
        assert_eq!(updated.instructions, None);
    }
}
