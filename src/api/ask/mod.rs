// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Ask API endpoint

pub mod handler;
pub mod request;
pub mod response;

pub use handler::ask_handler;
pub use request::AskApiRequest;
pub use response::AskApiResponse;
