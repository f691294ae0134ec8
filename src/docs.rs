//! OpenAPI document for the API, written to disk at startup and served
//! at /api-docs.

use std::io;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::AppState;

pub async fn serve_openapi(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(state.config.port))
}

/// Write the document next to the binary, as `openapi.json` by default.
/// Failure here is startup-fatal for the surrounding process.
pub fn write_openapi(path: &str, port: u16) -> io::Result<()> {
    let doc = openapi_document(port);
    std::fs::write(path, serde_json::to_string(&doc)?)
}

fn openapi_document(port: u16) -> Value {
    let bean_schema = json!({
        "type": "object",
        "properties": {
            "beanId": { "type": "integer", "description": "Unique identifier for the coffee bean" },
            "userId": { "type": "integer", "nullable": true, "description": "Owning user, null for the global catalog" },
            "name": { "type": "string", "description": "Name of the coffee bean" },
            "origin": { "type": "string", "description": "Country or region of origin" },
            "roastLevel": { "type": "string", "description": "Level of roast (e.g., light, medium, dark)" },
            "imageUrl": { "type": "string", "description": "URL" },
            "pricePerKg": { "type": "string", "description": "Price per kilogram, decimal as string" },
            "stockQuantity": { "type": "integer", "description": "Available quantity in stock" },
            "description": { "type": "string", "description": "Detailed description of the coffee bean" }
        }
    });

    let auth_response = json!({
        "type": "object",
        "properties": {
            "user": {
                "type": "object",
                "properties": {
                    "userId": { "type": "integer" },
                    "username": { "type": "string" },
                    "firstName": { "type": "string", "nullable": true },
                    "lastName": { "type": "string", "nullable": true },
                    "createdAt": { "type": "string", "format": "date-time", "nullable": true }
                }
            },
            "token": { "type": "string", "description": "Bearer token, valid for 3600 seconds" }
        }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Coffee Addiction API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Coffee Addiction API swagger documentation"
        },
        "servers": [
            { "url": format!("http://localhost:{}", port) }
        ],
        "components": {
            "schemas": {
                "CoffeeBean": bean_schema,
                "AuthResponse": auth_response
            },
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            }
        },
        "paths": {
            "/beans": {
                "get": {
                    "summary": "Returns list of coffee beans",
                    "tags": ["Coffee Beans"],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "500": { "description": "Internal server error" }
                    }
                },
                "post": {
                    "summary": "Creates a new bean",
                    "tags": ["Coffee Beans"],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "500": { "description": "Internal server error" }
                    }
                }
            },
            "/auth/signup": {
                "post": {
                    "summary": "Create a user and receive a token",
                    "tags": ["Auth"],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "400": { "description": "Rejected signup" }
                    }
                }
            },
            "/auth/login": {
                "post": {
                    "summary": "Authenticate and receive a token",
                    "tags": ["Auth"],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "400": { "description": "Rejected login" }
                    }
                }
            },
            "/auth/whoami": {
                "get": {
                    "summary": "Current authenticated user",
                    "tags": ["Auth"],
                    "security": [{ "bearerAuth": [] }],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "401": { "description": "Missing or invalid token" }
                    }
                }
            },
            "/users/beans": {
                "get": {
                    "summary": "Beans owned by the authenticated user",
                    "tags": ["Coffee Beans"],
                    "security": [{ "bearerAuth": [] }],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "401": { "description": "Missing or invalid token" }
                    }
                },
                "post": {
                    "summary": "Create a bean owned by the authenticated user",
                    "tags": ["Coffee Beans"],
                    "security": [{ "bearerAuth": [] }],
                    "responses": {
                        "200": { "description": "Successful response" },
                        "401": { "description": "Missing or invalid token" }
                    }
                }
            },
            "/users/beans/{beanId}": {
                "delete": {
                    "summary": "Delete an owned bean",
                    "tags": ["Coffee Beans"],
                    "security": [{ "bearerAuth": [] }],
                    "parameters": [
                        { "name": "beanId", "in": "path", "required": true, "schema": { "type": "integer" } }
                    ],
                    "responses": {
                        "200": { "description": "Successful response (also returned when nothing matched)" },
                        "401": { "description": "Missing or invalid token" }
                    }
                }
            }
        }
    })
}
