pub const GITHUB_SERVICE: &str = "github";

pub const X_GITHUB_EVENT: &str = "x-github-event";
pub const X_HUB_SIGNATURE: &str = "x-hub-signature";
