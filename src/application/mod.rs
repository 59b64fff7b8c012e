// SPDX-License-Identifier: MPL-2.0
//! Application layer - port definitions for dependency inversion.
//!
//! The application layer sits between the domain layer (pure value types)
//! and the infrastructure/presentation layers:
//!
//! - **Ports (Traits)**: abstract interfaces that infrastructure implements
//!   and the UI host depends on.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes the ports, never the adapters directly

pub mod port;
