use lattice::activities::{ActivityContext, ActivityData, Aggregator, And, Or};
use lattice::error::ActivityError;
use lattice::Activity;

use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn perform(activity: &dyn Activity, data: ActivityData) -> Result<ActivityData, ActivityError> {
        activity.perform(&ActivityContext::new(), data)
    }

    #[test]
    fn or_is_true_iff_any_element_is_true() {
        let or = Aggregator::new(Or);
        let out = perform(&or, ActivityData::vector([true, false, false])).unwrap();
        assert_eq!(out, ActivityData::Scalar(json!(true)));

        let out = perform(&or, ActivityData::vector([false, false])).unwrap();
        assert_eq!(out, ActivityData::Scalar(json!(false)));
    }

    #[test]
    fn or_over_the_empty_vector_is_false() {
        let or = Aggregator::new(Or);
        let out = perform(&or, ActivityData::Vector(vec![])).unwrap();
        assert_eq!(out, ActivityData::Scalar(json!(false)));
    }

    #[test]
    fn and_over_the_empty_vector_is_true() {
        let and = Aggregator::new(And);
        let out = perform(&and, ActivityData::Vector(vec![])).unwrap();
        assert_eq!(out, ActivityData::Scalar(json!(true)));
    }

    #[test]
    fn non_boolean_elements_are_rejected_without_coercion() {
        let or = Aggregator::new(Or);
        let err = perform(&or, ActivityData::Vector(vec![json!(true), json!("x")])).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidArgument(_)));

        // position does not matter
        let err = perform(&or, ActivityData::Vector(vec![json!(0), json!(true)])).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidArgument(_)));
    }

    #[test]
    fn strict_aggregator_rejects_scalar_input() {
        let or = Aggregator::new(Or);
        let err = perform(&or, ActivityData::scalar(true)).unwrap_err();
        assert!(matches!(err, ActivityError::CardinalityMismatch { .. }));
    }

    #[test]
    fn lenient_aggregator_passes_scalar_input_through() {
        let or = Aggregator::new(Or).with_strict(false);
        let out = perform(&or, ActivityData::scalar("untouched")).unwrap();
        assert_eq!(out, ActivityData::Scalar(json!("untouched")));
    }
}
