use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use serde_json::json;
use shelf_http::ApiPath;
use shelf_kernel::{InitCtx, Module};

pub const GREETING: &str = "Hello Breno!";

/// Static greeting and name echo
pub struct GreetingModule;

impl GreetingModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for GreetingModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for GreetingModule {
    fn name(&self) -> &'static str {
        "greeting"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "greeting module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(greet))
            .route("/{name}", get(echo_name))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Greeting",
                        "tags": ["Greeting"],
                        "responses": {
                            "200": {
                                "description": "Fixed greeting message",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Greeting" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{name}": {
                    "get": {
                        "summary": "Echo a name",
                        "tags": ["Greeting"],
                        "parameters": [{
                            "name": "name",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "The name wrapped in a one-element array",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "type": "string" },
                                            "minItems": 1,
                                            "maxItems": 1
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Greeting": {
                        "type": "object",
                        "properties": {
                            "message": { "type": "string" }
                        },
                        "required": ["message"]
                    }
                }
            }
        }))
    }
}

async fn greet() -> Json<serde_json::Value> {
    Json(json!({ "message": GREETING }))
}

async fn echo_name(ApiPath(name): ApiPath<String>) -> Json<[String; 1]> {
    Json([name])
}

/// Create a new instance of the greeting module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(GreetingModule::new())
}
