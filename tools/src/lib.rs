/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Shared plumbing for the Resy command line tools
//!
//! Each binary parses its own arguments, flattens [`args::AuthArgs`] and
//! [`args::QueryArgs`] into them, and drives the client one call at a time.

pub mod args;
pub mod booking;
pub mod output;
pub mod selection;
