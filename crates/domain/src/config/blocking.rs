use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlockingConfig {
    #[serde(default)]
    pub blocklist: Vec<String>,

    #[serde(default)]
    pub blockregex: Vec<String>,
}
