//! # Services Module
//!
//! External service integrations for the student client.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        CLI / application layer               │
//! │                                              │
//! │   ┌──────────────────┐    ┌──────────────┐   │
//! │   │   ApiClient      │───▶│   Session    │   │
//! │   │   (api/)         │    │   (tokens)   │   │
//! │   └────────┬─────────┘    └──────────────┘   │
//! └────────────┼─────────────────────────────────┘
//!              │ HTTP/JSON, multipart uploads
//!              ▼
//! ┌──────────────────────────────────────────────┐
//! │  LMS backend                                 │
//! │  /api/auth/*  /api/profile/*  /api/courses/* │
//! │  /api/assignments/*  /api/tests/*            │
//! │  /api/chat/*  /api/calendar  /api/notifications │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! When the backend cannot be reached, times out, or answers with an error,
//! each operation serves fixture data tagged as `Outcome::Fallback`.

pub mod api;
