pub mod config;
pub mod logging;

pub mod batch;
pub mod dispatch;
pub mod features;
pub mod model;
pub mod schema;
pub mod url_model;

pub use dispatch::{PredictError, Prediction, PredictionDispatcher};
pub use features::{FeatureExtractor, FeatureVector, FEATURE_NAMES};
pub use model::{Classifier, Label, Model};
pub use schema::Schema;
