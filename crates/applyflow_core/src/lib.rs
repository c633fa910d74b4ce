//! Applyflow core: pure state machine and view-model helpers.
mod auto_apply;
mod effect;
mod intent;
mod msg;
mod profile;
mod state;
mod update;
mod view_model;

pub use auto_apply::{AutoApplyParams, AutoApplyRequest};
pub use effect::Effect;
pub use intent::{Destination, Intent, LoginFailure, LoginSuccess};
pub use msg::Msg;
pub use profile::{
    fallback_for_text, pretty_json, EducationEntry, PersonalInfo, ProfileDocument,
    WorkExperienceEntry,
};
pub use state::{AppState, SubmissionPhase};
pub use update::update;
pub use view_model::{AppViewModel, StatusLine, StatusTone};
