// src/application/dto/mod.rs
pub mod exchange;
pub mod resource;

pub use exchange::{Exchange, RecordedRequest, RecordedResponse};
pub use resource::{
    HeaderDescriptorWithType, ParameterDescriptorWithType, RequestModel, ResourceModel,
    ResourceSnippetParameters, ResponseModel, SimpleType,
};
