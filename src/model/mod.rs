/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Credential holder
pub mod auth;
/// Static endpoint descriptors
pub mod endpoint;
/// HTTP transport
pub mod http;
/// Request construction
pub mod request;
/// Typed request parameters
pub mod requests;
/// Response decoding
pub mod response;
/// Response records
pub mod responses;
