//! Final OpenAPI document assembly.

use serde::Serialize;

use crate::{
    config::{Config, ExternalDoc, Info, Server},
    core::Registry,
};

pub const OPENAPI_VERSION: &str = "3.0.4";

#[derive(Debug, Serialize)]
pub struct OpenApiDocument<'a> {
    pub openapi: &'static str,
    pub info: &'a Info,
    pub servers: &'a [Server],
    #[serde(rename = "externalDoc")]
    pub external_doc: &'a ExternalDoc,
    pub components: Components<'a>,
}

#[derive(Debug, Serialize)]
pub struct Components<'a> {
    pub schemas: &'a Registry,
}

impl<'a> OpenApiDocument<'a> {
    pub fn new(config: &'a Config, registry: &'a Registry) -> Self {
        Self {
            openapi: OPENAPI_VERSION,
            info: &config.info,
            servers: &config.servers,
            external_doc: &config.external_doc,
            components: Components { schemas: registry },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
