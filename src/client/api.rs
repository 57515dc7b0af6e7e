// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed endpoint methods.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::command::{ServiceCommand, StateUpdate};
use crate::error::{Result, ValidationError};
use crate::filter::{LogbookFilter, QueryFilter, StateChangesFilter};
use crate::protocol::{Decoder, Discard, Jpeg, Json, PlainText, Transport};
use crate::types::{
    ApiMessage, Config, ConfigCheck, DiscoveryInfo, Event, JpegImage, LogbookRecord,
    ServiceDomain, StateChanges, StateEntity, StateResponse,
};

const EP_PING: &str = "/api/";
const EP_CONFIG: &str = "/api/config";
const EP_DISCOVERY_INFO: &str = "/api/discovery_info";
const EP_EVENTS: &str = "/api/events";
const EP_SERVICES: &str = "/api/services";
const EP_HISTORY: &str = "/api/history/period";
const EP_LOGBOOK: &str = "/api/logbook";
const EP_STATES: &str = "/api/states";
const EP_ERROR_LOG: &str = "/api/error_log";
const EP_CAMERA_PROXY: &str = "/api/camera_proxy";
const EP_TEMPLATE: &str = "/api/template";
const EP_CHECK_CONFIG: &str = "/api/config/core/check_config";

#[derive(Serialize)]
struct TemplateRequest<'a> {
    template: &'a str,
}

impl<T: Transport> Client<T> {
    // =========================================================================
    // Server
    // =========================================================================

    /// Checks that the API is up and the token is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    pub async fn ping(&self) -> Result<()> {
        self.get(EP_PING, Discard).await
    }

    /// Returns the current server configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn config(&self) -> Result<Config> {
        self.get(EP_CONFIG, Json::new()).await
    }

    /// Returns basic discovery information.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn discovery_info(&self) -> Result<DiscoveryInfo> {
        self.get(EP_DISCOVERY_INFO, Json::new()).await
    }

    /// Returns the error log as plain text.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the log is not UTF-8.
    pub async fn error_log(&self) -> Result<String> {
        self.get(EP_ERROR_LOG, PlainText).await
    }

    /// Asks the server to validate its configuration files.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    /// An invalid configuration is not an error: see [`ConfigCheck::is_valid`].
    pub async fn check_config(&self) -> Result<ConfigCheck> {
        self.post(EP_CHECK_CONFIG, None, Json::new()).await
    }

    // =========================================================================
    // Events and services
    // =========================================================================

    /// Lists event types and their listener count.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.get(EP_EVENTS, Json::new()).await
    }

    /// Fires an event, with optional event data.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEventType` if `event_type` is empty,
    /// or error if the request fails.
    pub async fn fire_event(&self, event_type: &str, data: Option<&Value>) -> Result<ApiMessage> {
        let path = segment_path(EP_EVENTS, event_type, ValidationError::EmptyEventType)?;
        let body = data.map(json_body).transpose()?;
        self.post(&path, body, Json::new()).await
    }

    /// Lists services grouped by domain.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn services(&self) -> Result<Vec<ServiceDomain>> {
        self.get(EP_SERVICES, Json::new()).await
    }

    /// Calls a service and returns the states that changed while it ran.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyService` or `ValidationError::EmptyDomain`
    /// before sending anything if the command does not name a service, or
    /// error if the request fails.
    pub async fn call_service<C: ServiceCommand>(&self, command: &C) -> Result<Vec<StateEntity>> {
        if command.service().is_empty() {
            return Err(ValidationError::EmptyService.into());
        }
        if command.domain().is_empty() {
            return Err(ValidationError::EmptyDomain.into());
        }

        let path = format!(
            "{EP_SERVICES}/{}/{}",
            urlencoding::encode(command.domain()),
            urlencoding::encode(command.service())
        );
        let body = json_body(command)?;
        self.post(&path, Some(body), Json::new()).await
    }

    // =========================================================================
    // States
    // =========================================================================

    /// Lists the current state of every entity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn states(&self) -> Result<Vec<StateEntity>> {
        self.get(EP_STATES, Json::new()).await
    }

    /// Returns the current state of one entity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEntityId` if `entity_id` is empty,
    /// `Error::NotFound` if the entity does not exist, or error if the
    /// request fails.
    pub async fn state(&self, entity_id: &str) -> Result<StateEntity> {
        let path = segment_path(EP_STATES, entity_id, ValidationError::EmptyEntityId)?;
        self.get(&path, Json::new()).await
    }

    /// Creates or updates the state of an entity.
    ///
    /// This only changes the representation stored by the server, not the
    /// device itself.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEntityId` if `entity_id` is empty, or
    /// error if the request fails.
    pub async fn set_state(&self, entity_id: &str, update: &StateUpdate) -> Result<StateResponse> {
        let path = segment_path(EP_STATES, entity_id, ValidationError::EmptyEntityId)?;
        let body = json_body(update)?;
        let (status, entity) = self
            .execute(Method::POST, &path, Some(body), Json::new())
            .await?;
        Ok(StateResponse { entity, status })
    }

    /// Returns the state history within the filtered period.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn history(&self, filter: &StateChangesFilter) -> Result<StateChanges> {
        let path = format!("{EP_HISTORY}{}", filter.to_query_string());
        self.get(&path, Json::new()).await
    }

    /// Returns the logbook entries within the filtered period.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    pub async fn logbook(&self, filter: &LogbookFilter) -> Result<Vec<LogbookRecord>> {
        let path = format!("{EP_LOGBOOK}{}", filter.to_query_string());
        self.get(&path, Json::new()).await
    }

    // =========================================================================
    // Cameras and templates
    // =========================================================================

    /// Returns the current image of a camera entity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEntityId` if `entity_id` is empty, or
    /// error if the request fails or the body is not a JPEG image.
    pub async fn camera_snapshot(&self, entity_id: &str) -> Result<JpegImage> {
        let path = segment_path(EP_CAMERA_PROXY, entity_id, ValidationError::EmptyEntityId)?;
        self.get(&path, Jpeg).await
    }

    /// Renders a template on the server.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTemplate` if `template` is empty, or
    /// error if the request fails (a template syntax error is a
    /// `Error::BadRequest`).
    pub async fn render_template(&self, template: &str) -> Result<String> {
        if template.is_empty() {
            return Err(ValidationError::EmptyTemplate.into());
        }
        let body = json_body(&TemplateRequest { template })?;
        self.post(EP_TEMPLATE, Some(body), PlainText).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn get<D: Decoder>(&self, path: &str, decoder: D) -> Result<D::Output> {
        let (_, output) = self.execute(Method::GET, path, None, decoder).await?;
        Ok(output)
    }

    async fn post<D: Decoder>(
        &self,
        path: &str,
        body: Option<Bytes>,
        decoder: D,
    ) -> Result<D::Output> {
        let (_, output) = self.execute(Method::POST, path, body, decoder).await?;
        Ok(output)
    }
}

/// Appends one percent-encoded path segment, rejecting an empty one.
fn segment_path(base: &str, segment: &str, empty: ValidationError) -> Result<String> {
    if segment.is_empty() {
        return Err(empty.into());
    }
    Ok(format!("{base}/{}", urlencoding::encode(segment)))
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(body)?))
}
