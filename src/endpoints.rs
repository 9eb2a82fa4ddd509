//! Operation descriptors for every endpoint of the core service.

use crate::request::HttpMethod::{Delete, Get, Patch, Post, Put};
use crate::request::Operation;

// Namespaces
pub const CREATE_NAMESPACE: Operation = Operation::new(Post, "/api/namespaces");
pub const GET_ALL_NAMESPACES: Operation = Operation::new(Get, "/api/namespaces");
pub const GET_NAMESPACE: Operation = Operation::new(Get, "/api/namespaces/{namespaceId}");
pub const GET_NAMESPACES_FOR_MEMBER: Operation =
    Operation::new(Get, "/api/users/{memberId}/namespaces");
pub const UPDATE_NAMESPACE: Operation = Operation::new(Put, "/api/namespaces/{namespaceId}");
pub const DELETE_NAMESPACE: Operation = Operation::new(Delete, "/api/namespaces/{namespaceId}");

// Applications
pub const CREATE_APP: Operation = Operation::new(Post, "/api/apps");
pub const GET_ALL_APPS: Operation = Operation::new(Get, "/api/apps");
pub const GET_APP: Operation = Operation::new(Get, "/api/apps/{appId}");
pub const UPDATE_APP: Operation = Operation::new(Put, "/api/apps/{appId}");
pub const DELETE_APP: Operation = Operation::new(Delete, "/api/apps/{appId}");

// Environments
pub const CREATE_ENVIRONMENT: Operation = Operation::new(Post, "/api/environments");
pub const GET_ALL_ENVIRONMENTS: Operation = Operation::new(Get, "/api/environments");
pub const GET_ENVIRONMENT: Operation = Operation::new(Get, "/api/environments/{environmentId}");
pub const UPDATE_ENVIRONMENT: Operation =
    Operation::new(Put, "/api/environments/{environmentId}");
pub const DELETE_ENVIRONMENT: Operation =
    Operation::new(Delete, "/api/environments/{environmentId}");

// Blueprints
pub const CREATE_BLUEPRINT: Operation = Operation::new(Post, "/api/blueprints");
pub const GET_ALL_BLUEPRINTS: Operation = Operation::new(Get, "/api/blueprints");
pub const GET_BLUEPRINT: Operation = Operation::new(Get, "/api/blueprints/{blueprintId}");
pub const UPDATE_BLUEPRINT: Operation = Operation::new(Patch, "/api/blueprints/{blueprintId}");
pub const DELETE_BLUEPRINT: Operation = Operation::new(Delete, "/api/blueprints/{blueprintId}");

// Blueprint apps
pub const GET_BLUEPRINT_APPS: Operation = Operation::new(Get, "/api/blueprints/{blueprintId}/apps");
pub const GET_BLUEPRINT_APP: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/apps/{appId}");
pub const ADD_BLUEPRINT_APP: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/apps");
pub const REMOVE_BLUEPRINT_APP: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/apps/{appId}");

// Blueprint assertions
pub const GET_BLUEPRINT_ASSERTIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/assertions");
pub const GET_BLUEPRINT_ASSERTION: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/assertions/{assertionId}");
pub const ADD_BLUEPRINT_ASSERTION: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/assertions");
pub const UPDATE_BLUEPRINT_ASSERTION: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/assertions/{assertionId}");
pub const REMOVE_BLUEPRINT_ASSERTION: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/assertions/{assertionId}");

// Blueprint parameters
pub const GET_BLUEPRINT_PARAMETERS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/parameters");
pub const GET_BLUEPRINT_PARAMETER: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/parameters/{parameterId}");
pub const ADD_BLUEPRINT_PARAMETER: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/parameters");
pub const UPDATE_BLUEPRINT_PARAMETER: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/parameters/{parameterId}");
pub const REMOVE_BLUEPRINT_PARAMETER: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/parameters/{parameterId}");

// Blueprint correlations
pub const GET_BLUEPRINT_CORRELATIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/correlations");
pub const GET_BLUEPRINT_CORRELATION: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/correlations/{correlationId}");
pub const ADD_BLUEPRINT_CORRELATION: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/correlations");
pub const UPDATE_BLUEPRINT_CORRELATION: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/correlations/{correlationId}");
pub const REMOVE_BLUEPRINT_CORRELATION: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/correlations/{correlationId}");

// Blueprint files
pub const GET_BLUEPRINT_FILES: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/files");
pub const GET_BLUEPRINT_FILE: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/files/{fileId}");
pub const ADD_BLUEPRINT_FILE: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/files");
pub const UPDATE_BLUEPRINT_FILE: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/files/{fileId}");
pub const REMOVE_BLUEPRINT_FILE: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/files/{fileId}");

// Blueprint run configurations
pub const GET_BLUEPRINT_RUN_CONFIGURATIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/run-configurations");
pub const GET_BLUEPRINT_RUN_CONFIGURATION: Operation = Operation::new(
    Get,
    "/api/blueprints/{blueprintId}/run-configurations/{runConfigurationId}",
);
pub const ADD_BLUEPRINT_RUN_CONFIGURATION: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/run-configurations");
pub const UPDATE_BLUEPRINT_RUN_CONFIGURATION: Operation = Operation::new(
    Patch,
    "/api/blueprints/{blueprintId}/run-configurations/{runConfigurationId}",
);
pub const REMOVE_BLUEPRINT_RUN_CONFIGURATION: Operation = Operation::new(
    Delete,
    "/api/blueprints/{blueprintId}/run-configurations/{runConfigurationId}",
);

// Blueprint permissions
pub const GET_BLUEPRINT_PERMISSIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/permissions");
pub const UPDATE_BLUEPRINT_PERMISSIONS: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/permissions");
pub const GET_ALL_BLUEPRINT_USER_PERMISSIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/permissions/users");
pub const GET_BLUEPRINT_USER_PERMISSIONS: Operation =
    Operation::new(Get, "/api/blueprints/{blueprintId}/permissions/users/{userId}");
pub const ADD_BLUEPRINT_USER_PERMISSIONS: Operation =
    Operation::new(Post, "/api/blueprints/{blueprintId}/permissions/users");
pub const UPDATE_BLUEPRINT_USER_PERMISSIONS: Operation =
    Operation::new(Patch, "/api/blueprints/{blueprintId}/permissions/users/{userId}");
pub const REMOVE_BLUEPRINT_USER_PERMISSIONS: Operation =
    Operation::new(Delete, "/api/blueprints/{blueprintId}/permissions/users/{userId}");

/// Every descriptor, for callers that want to enumerate the surface.
pub const ALL: &[Operation] = &[
    CREATE_NAMESPACE,
    GET_ALL_NAMESPACES,
    GET_NAMESPACE,
    GET_NAMESPACES_FOR_MEMBER,
    UPDATE_NAMESPACE,
    DELETE_NAMESPACE,
    CREATE_APP,
    GET_ALL_APPS,
    GET_APP,
    UPDATE_APP,
    DELETE_APP,
    CREATE_ENVIRONMENT,
    GET_ALL_ENVIRONMENTS,
    GET_ENVIRONMENT,
    UPDATE_ENVIRONMENT,
    DELETE_ENVIRONMENT,
    CREATE_BLUEPRINT,
    GET_ALL_BLUEPRINTS,
    GET_BLUEPRINT,
    UPDATE_BLUEPRINT,
    DELETE_BLUEPRINT,
    GET_BLUEPRINT_APPS,
    GET_BLUEPRINT_APP,
    ADD_BLUEPRINT_APP,
    REMOVE_BLUEPRINT_APP,
    GET_BLUEPRINT_ASSERTIONS,
    GET_BLUEPRINT_ASSERTION,
    ADD_BLUEPRINT_ASSERTION,
    UPDATE_BLUEPRINT_ASSERTION,
    REMOVE_BLUEPRINT_ASSERTION,
    GET_BLUEPRINT_PARAMETERS,
    GET_BLUEPRINT_PARAMETER,
    ADD_BLUEPRINT_PARAMETER,
    UPDATE_BLUEPRINT_PARAMETER,
    REMOVE_BLUEPRINT_PARAMETER,
    GET_BLUEPRINT_CORRELATIONS,
    GET_BLUEPRINT_CORRELATION,
    ADD_BLUEPRINT_CORRELATION,
    UPDATE_BLUEPRINT_CORRELATION,
    REMOVE_BLUEPRINT_CORRELATION,
    GET_BLUEPRINT_FILES,
    GET_BLUEPRINT_FILE,
    ADD_BLUEPRINT_FILE,
    UPDATE_BLUEPRINT_FILE,
    REMOVE_BLUEPRINT_FILE,
    GET_BLUEPRINT_RUN_CONFIGURATIONS,
    GET_BLUEPRINT_RUN_CONFIGURATION,
    ADD_BLUEPRINT_RUN_CONFIGURATION,
    UPDATE_BLUEPRINT_RUN_CONFIGURATION,
    REMOVE_BLUEPRINT_RUN_CONFIGURATION,
    GET_BLUEPRINT_PERMISSIONS,
    UPDATE_BLUEPRINT_PERMISSIONS,
    GET_ALL_BLUEPRINT_USER_PERMISSIONS,
    GET_BLUEPRINT_USER_PERMISSIONS,
    ADD_BLUEPRINT_USER_PERMISSIONS,
    UPDATE_BLUEPRINT_USER_PERMISSIONS,
    REMOVE_BLUEPRINT_USER_PERMISSIONS,
];
