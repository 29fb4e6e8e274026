/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request construction
//!
//! [`build`] turns a descriptor, caller parameters and credentials into a
//! complete [`ApiRequest`]. It performs no I/O, so header and URL construction
//! can be checked without a live service.

use crate::constants::{FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::endpoint::{Encoding, EndpointDescriptor, ParamSpec};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern"));

// RFC 3986 unreserved characters.
static PATH_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("path segment pattern"));

/// Caller-supplied parameters, keyed by wire name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Creates an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes a parameter
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Returns a parameter by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameter names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Builds a parameter set from the fields of a serializable struct
    ///
    /// # Returns
    /// * `Ok(Params)` - One parameter per top-level field
    /// * `Err(AppError::InvalidParameter)` - The value does not serialize to
    ///   a JSON object
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, AppError> {
        match serde_json::to_value(value) {
            Ok(Value::Object(fields)) => Ok(Self(fields.into_iter().collect())),
            Ok(other) => Err(AppError::invalid_parameter(
                "params",
                format!("expected an object, got {other}"),
            )),
            Err(e) => Err(AppError::invalid_parameter("params", e.to_string())),
        }
    }
}

/// A fully-formed request, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, query included
    pub url: Url,
    /// Headers, credentials included
    pub headers: HeaderMap,
    /// Encoded body, for endpoints that send one
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Body as text, for diagnostics and tests
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

/// Builds the request for `descriptor` with `params`
///
/// # Arguments
/// * `descriptor` - The endpoint to call
/// * `params` - Caller parameters, keyed by wire name
/// * `credentials` - Credentials attached to every request
/// * `base_url` - Scheme and host of the API
///
/// # Returns
/// * `Ok(ApiRequest)` - The request; identical inputs give identical output
/// * `Err(AppError::InvalidParameter)` - A parameter is undeclared or its
///   value cannot be placed in the URL safely
/// * `Err(AppError::MissingParameter)` - A required parameter is absent
pub fn build<R>(
    descriptor: &EndpointDescriptor<R>,
    params: &Params,
    credentials: &Credentials,
    base_url: &Url,
) -> Result<ApiRequest, AppError> {
    // Missing keys are reported ahead of undeclared ones.
    for spec in descriptor.params.iter().filter(|p| p.required) {
        if present(params, spec.name).is_none() {
            return Err(AppError::MissingParameter(spec.name.to_string()));
        }
    }

    for name in params.names() {
        if descriptor.param(name).is_none() {
            return Err(AppError::invalid_parameter(
                name,
                format!("not accepted by {}", descriptor.name),
            ));
        }
    }

    let path = render_path(descriptor, params)?;
    let mut url = Url::parse(&format!("{}{}", base_url.as_str().trim_end_matches('/'), path))
        .map_err(|e| AppError::invalid_parameter("path", e.to_string()))?;

    let fields: Vec<(&ParamSpec, &Value)> = descriptor
        .params
        .iter()
        .filter(|p| !p.in_path)
        .filter_map(|p| present(params, p.name).map(|v| (p, v)))
        .collect();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    let body = match descriptor.encoding {
        Encoding::Query => {
            if !fields.is_empty() {
                let mut pairs = url.query_pairs_mut();
                for (spec, value) in &fields {
                    pairs.append_pair(spec.name, &field_text(value));
                }
            }
            None
        }
        Encoding::Json => {
            let object: Map<String, Value> = fields
                .iter()
                .map(|(spec, value)| (spec.name.to_string(), (*value).clone()))
                .collect();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            Some(serde_json::to_vec(&Value::Object(object)).map_err(|e| {
                AppError::invalid_parameter(descriptor.name, e.to_string())
            })?)
        }
        Encoding::Form => {
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            for (spec, value) in &fields {
                form.append_pair(spec.name, &field_text(value));
            }
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            Some(form.finish().into_bytes())
        }
    };

    credentials.apply_to(&mut headers);

    Ok(ApiRequest {
        method: descriptor.method.clone(),
        url,
        headers,
        body,
    })
}

/// A parameter counts as present when it is set and not null
fn present<'a>(params: &'a Params, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

fn render_path<R>(descriptor: &EndpointDescriptor<R>, params: &Params) -> Result<String, AppError> {
    let template = descriptor.path;
    let mut path = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if !descriptor.param(name).is_some_and(|p| p.in_path) {
            return Err(AppError::invalid_parameter(
                name,
                "path placeholder has no declared path parameter",
            ));
        }
        let value = present(params, name)
            .ok_or_else(|| AppError::MissingParameter(name.to_string()))?;
        let text = match value {
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::invalid_parameter(
                    name,
                    "path values must be scalars",
                ));
            }
            scalar => field_text(scalar),
        };
        if !PATH_SEGMENT.is_match(&text) {
            return Err(AppError::invalid_parameter(
                name,
                format!("{text:?} would corrupt the URL"),
            ));
        }

        path.push_str(&template[last..whole.start()]);
        path.push_str(&text);
        last = whole.end();
    }
    path.push_str(&template[last..]);
    Ok(path)
}

/// Text form of a query or form value; structured values become compact JSON
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
