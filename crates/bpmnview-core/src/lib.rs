//! BPMN Viewer Core Types and Definitions
//!
//! This crate provides the foundational types shared by the BPMN parser and
//! renderer. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds in DI coordinates ([`geometry`] module)
//! - **Draw**: Shape definitions and vector primitives ([`draw`] module)
//! - **Semantic**: The parsed BPMN document and its DI planes ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod semantic;
