//! Photo Annotator Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態管理

pub mod error;
pub mod mime;
pub mod mock;
pub mod preview;
pub mod session;
pub mod settings;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
pub use mime::{MimePolicy, ACCEPT_ATTRIBUTE};
pub use mock::{MockAnnotator, TAG_VOCABULARY};
pub use preview::{NamePreviews, Preview, PreviewFactory};
pub use session::{AnalysisJob, JobOutcome, Phase, Session};
pub use settings::AnalysisSettings;
pub use types::{AnnotationResult, BoundingBox, PendingFile};
pub use upload::{AddReport, RejectReason, Rejection, UploadQueue};
