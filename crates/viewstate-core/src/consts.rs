/// Presentation id kind handled by the segmentation resolver.
pub const SEGMENTATION_PRESENTATION_ID: &str = "segmentationPresentationId";

/// Separator placed between display set UIDs (and before a uniqueness suffix).
pub const PRESENTATION_JOIN_STR: &str = "&";

/// First numeric suffix tried when a candidate key is already taken.
pub const DEFAULT_SUFFIX_BASE: u32 = 1;

/// Text shown while the next image is being fetched.
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Heading shown when the pending image failed to load.
pub const DEFAULT_ERROR_TITLE: &str = "Error Loading Image";

/// Body shown above the upstream error payload.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error has occurred.";
