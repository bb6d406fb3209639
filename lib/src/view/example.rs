use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, Chainable};
use crate::format::{self, key_value_text};
use crate::model::{Example, Headers, Parameter, Request};
use crate::util::{file_name, slugify_dir};

/// Everything an example's detail page can read.
#[derive(Debug, Serialize)]
pub struct ExampleView<'a> {
    pub resource_name: &'a str,
    pub description: &'a str,
    pub http_method: &'a str,
    pub route: &'a str,
    pub explanation: Option<&'a str>,
    pub parameters: &'a [Parameter],
    pub response_fields: &'a [Parameter],
    pub requests: Vec<RequestView<'a>>,

    /// Directory, relative to the output root, holding this page.
    pub dir_name: String,
    /// This page's file name, including `.html`.
    pub file_name: String,
}

/// One request/response pair of an [`ExampleView`].
#[derive(Debug, Serialize)]
pub struct RequestView<'a> {
    pub request_method: &'a str,
    pub request_path: &'a str,
    pub request_body: Option<&'a str>,
    pub request_headers: &'a Headers,
    pub request_query_parameters: &'a Headers,
    pub request_content_type: Option<&'a str>,
    pub response_status: u16,
    pub response_status_text: Option<&'a str>,
    pub response_headers: &'a Headers,
    pub response_body: &'a str,
    pub response_content_type: Option<&'a str>,

    pub request_headers_text: Option<String>,
    pub request_query_parameters_text: Option<String>,
    pub response_headers_text: Option<String>,
    pub response_body_formatted: String,
    /// Whether `response_body_formatted` is highlighted markup rather than
    /// the raw body.
    pub response_body_highlighted: bool,
    /// The reproducing `curl` command. Only present when a host is
    /// configured and the request recorded a command.
    pub curl: Option<String>,
}

impl<'a> ExampleView<'a> {
    pub fn new(example: &'a Example, config: &Config) -> Result<Self> {
        let requests = example.requests.iter()
            .enumerate()
            .map(|(i, request)| RequestView::new(request, config).chain_with(|| error! {
                "failed to format example request",
                "example" => &example.description,
                "resource" => &example.resource_name,
                "request index" => i,
            }))
            .collect::<Result<Vec<_>>>()?;

        let dir_name = slugify_dir(&example.resource_name);
        let file_name = file_name(&example.description);
        Ok(ExampleView {
            resource_name: &example.resource_name,
            description: &example.description,
            http_method: &example.http_method,
            route: &example.route,
            explanation: example.explanation.as_deref(),
            parameters: &example.parameters,
            response_fields: &example.response_fields,
            requests,
            dir_name,
            file_name,
        })
    }

    /// The page's path relative to the output root.
    pub fn path(&self) -> PathBuf {
        Path::new(&self.dir_name).join(&self.file_name)
    }
}

impl<'a> RequestView<'a> {
    pub fn new(request: &'a Request, config: &Config) -> Result<Self> {
        let body = format::response_body(
            request.response_content_type_header(),
            &request.response_body
        )?;

        let curl = match (&config.curl_host, &request.curl) {
            (Some(host), Some(curl)) => {
                Some(curl.output_filtered(host, &config.curl_headers_to_filter))
            }
            _ => None,
        };

        Ok(RequestView {
            request_method: &request.request_method,
            request_path: &request.request_path,
            request_body: request.request_body.as_deref(),
            request_headers: &request.request_headers,
            request_query_parameters: &request.request_query_parameters,
            request_content_type: request.request_content_type.as_deref(),
            response_status: request.response_status,
            response_status_text: request.response_status_text.as_deref(),
            response_headers: &request.response_headers,
            response_body: &request.response_body,
            response_content_type: request.response_content_type.as_deref(),
            request_headers_text: key_value_text(Some(&request.request_headers)),
            request_query_parameters_text: key_value_text(Some(&request.request_query_parameters)),
            response_headers_text: key_value_text(Some(&request.response_headers)),
            response_body_highlighted: body.is_highlighted(),
            response_body_formatted: body.into_string(),
            curl,
        })
    }
}
