/// Identification of a use case for the UI and for log categories
pub trait UseCaseMetadata {
    /// Index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "classify_image"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u101_classify_image"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
