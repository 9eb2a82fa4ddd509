//! One method per remote operation, grouped by resource family.
//!
//! Every method runs the same pipeline: bind its [`Operation`](crate::Operation)
//! from [`crate::endpoints`], build the request, send it through the client's
//! transport and normalize the outcome with date reconstitution enabled.
//! Request bodies are any `Serialize` value; the service defines their shape.

mod apps;
mod blueprints;
mod environments;
mod namespaces;
mod permissions;
mod rules;
