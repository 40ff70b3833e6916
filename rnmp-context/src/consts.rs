pub const DEFAULT_DINUC_DISTANCE: usize = 1;
pub const DEFAULT_SELECT_CHROMOSOME: &str = "chrM";
pub const SAMPLE_COLUMN: &str = "Sample";
