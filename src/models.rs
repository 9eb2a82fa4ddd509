//! Resource shapes returned by the service.
//!
//! The service owns these schemas, so the client passes them through as
//! [`Document`]s with dates reconstituted. Callers that want their own types
//! can use [`Envelope::decode`](crate::Envelope::decode) or
//! [`TestamentClient::execute`](crate::TestamentClient::execute).

use crate::document::Document;

pub type Namespace = Document;
pub type Application = Document;
pub type Environment = Document;
pub type Blueprint = Document;
pub type AssertionRule = Document;
pub type ParameterRule = Document;
pub type CorrelationRule = Document;
pub type FileRule = Document;
pub type RunConfiguration = Document;
pub type Permissions = Document;
pub type UserPermissions = Document;
