//! Domain operations that span more than one repository call.

pub mod unlock;
