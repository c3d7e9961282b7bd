//! HTTP client for the Slotify API.
//!
//! Provides both async and blocking client variants behind feature
//! flags. One method per backend endpoint; every call attaches an
//! `Authorization: Bearer` header when a token is set and is sent
//! unauthenticated otherwise — the backend is the authority on which
//! calls require auth.

/// Fallback base URL for the Slotify API.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Send-OTP endpoint path.
const SEND_OTP_PATH: &str = "/auth/send-otp";

/// Verify-OTP endpoint path.
const VERIFY_OTP_PATH: &str = "/auth/verify-otp";

/// Profile update endpoint path.
const PROFILE_PATH: &str = "/auth/profile";

/// Bookings collection path.
const BOOKINGS_PATH: &str = "/bookings";

/// Current user's bookings path.
const MY_BOOKINGS_PATH: &str = "/bookings/my-bookings";

/// Categories collection path.
const CATEGORIES_PATH: &str = "/categories";

/// Vendors collection path.
const VENDORS_PATH: &str = "/vendors";

/// Notifications collection path.
const NOTIFICATIONS_PATH: &str = "/notifications";

/// Mark-all-notifications-read path.
const NOTIFICATIONS_READ_ALL_PATH: &str = "/notifications/read-all";

/// Payment order creation path.
const PAYMENT_ORDERS_PATH: &str = "/payments/orders";

/// Payment verification path.
const PAYMENT_VERIFY_PATH: &str = "/payments/verify";

/// Admin stats path.
const ADMIN_STATS_PATH: &str = "/admin/stats";

/// Admin events collection path.
const ADMIN_EVENTS_PATH: &str = "/admin/events";

/// Admin vendors collection path.
const ADMIN_VENDORS_PATH: &str = "/admin/vendors";

/// Admin categories collection path.
const ADMIN_CATEGORIES_PATH: &str = "/admin/categories";

/// Admin bookings collection path.
const ADMIN_BOOKINGS_PATH: &str = "/admin/bookings";

/// Message used when an error response body cannot be read at all.
const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Extracts the backend's `message` field from an error body, falling
/// back to the raw body (or a generic string when empty).
#[cfg(any(feature = "async", feature = "blocking"))]
fn extract_error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    /// Minimal shape of a backend error body.
    struct ErrorBody {
        /// Human-readable rejection message.
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| {
            if body.is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_owned()
            } else {
                body.to_owned()
            }
        },
        |parsed| parsed.message,
    )
}

/// Generates a Slotify client (async or blocking) with builder, one
/// method per endpoint, and tests.
macro_rules! define_client {
    (
        client_name: $client:ident,
        builder_name: $builder:ident,
        http_type: $http_type:ty,
        request_builder_type: $req_builder:ty,
        response_type: $resp_type:ty,
        client_doc: $client_doc:expr,
        builder_doc: $builder_doc:expr,
        $(async_kw: $async_kw:tt,)?
        $(await_kw: $await_ext:tt,)?
    ) => {
        #[doc = $builder_doc]
        #[derive(Debug)]
        pub struct $builder {
            /// Bearer token, absent for unauthenticated sessions.
            token: Option<String>,
            /// Base URL override (per deployment, or for testing).
            base_url: Option<String>,
        }

        impl $builder {
            /// Sets the bearer token attached to every request.
            #[inline]
            #[must_use]
            pub fn token<T: Into<String>>(mut self, token: T) -> Self {
                self.token = Some(token.into());
                self
            }

            /// Overrides the base URL (per deployment, or for testing
            /// with a mock server).
            #[inline]
            #[must_use]
            pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
                self.base_url = Some(url.into());
                self
            }

            /// Builds the client.
            ///
            /// # Errors
            ///
            /// Returns [`SlotifyError::Http`] if the HTTP client fails
            /// to build.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub fn build(self) -> Result<$client> {
                let base_url = self
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
                tracing::debug!(base_url = %base_url, authenticated = self.token.is_some(), "building client");
                let http = <$http_type>::builder().build()?;

                Ok($client {
                    http,
                    token: self.token,
                    base_url,
                })
            }
        }

        #[doc = $client_doc]
        #[derive(Debug)]
        pub struct $client {
            /// Underlying HTTP client.
            http: $http_type,
            /// Bearer token, absent for unauthenticated sessions.
            token: Option<String>,
            /// API base URL.
            base_url: String,
        }

        impl $client {
            /// Creates a new builder for configuring the client.
            #[inline]
            #[must_use]
            pub const fn builder() -> $builder {
                $builder {
                    token: None,
                    base_url: None,
                }
            }

            /// Replaces the bearer token (login sets it, logout clears
            /// it). Subsequent requests use the new value.
            #[inline]
            pub fn set_token(&mut self, token: Option<String>) {
                tracing::debug!(authenticated = token.is_some(), "token updated");
                self.token = token;
            }

            /// Returns `true` when a bearer token is set.
            #[inline]
            #[must_use]
            pub const fn has_token(&self) -> bool {
                self.token.is_some()
            }

            // ── Auth ─────────────────────────────────────────────────

            /// Requests a one-time passcode for the given email.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails, the server
            /// returns a non-success status, or the response cannot be
            /// deserialized.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn send_otp(
                &self,
                request: &SendOtpRequest,
            ) -> Result<ApiMessage> {
                self.execute_json(
                    self.request(Method::POST, SEND_OTP_PATH).json(request),
                ) $( .$await_ext )?
            }

            /// Exchanges an email + passcode pair for a profile with
            /// bearer token.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails, the server
            /// rejects the passcode, or the response cannot be
            /// deserialized.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn verify_otp(
                &self,
                request: &VerifyOtpRequest,
            ) -> Result<Profile> {
                self.execute_json(
                    self.request(Method::POST, VERIFY_OTP_PATH).json(request),
                ) $( .$await_ext )?
            }

            /// Updates the authenticated user's profile, returning the
            /// refreshed profile blob.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn update_profile(
                &self,
                request: &UpdateProfileRequest,
            ) -> Result<Profile> {
                self.execute_json(
                    self.request(Method::PUT, PROFILE_PATH).json(request),
                ) $( .$await_ext )?
            }

            // ── Bookings ─────────────────────────────────────────────

            /// Creates a booking.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn create_booking(
                &self,
                request: &CreateBookingRequest,
            ) -> Result<Booking> {
                self.execute_json(
                    self.request(Method::POST, BOOKINGS_PATH).json(request),
                ) $( .$await_ext )?
            }

            /// Lists the authenticated user's own bookings.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn my_bookings(&self) -> Result<Vec<Booking>> {
                self.execute_json(self.request(Method::GET, MY_BOOKINGS_PATH))
                    $( .$await_ext )?
            }

            /// Lists bookings addressed to a vendor, optionally
            /// filtered by vendor id.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn vendor_bookings(
                &self,
                vendor_id: Option<&VendorId>,
            ) -> Result<Vec<Booking>> {
                let mut builder = self.request(Method::GET, BOOKINGS_PATH);
                if let Some(id) = vendor_id {
                    builder = builder.query(&[("vendorId", id.as_inner())]);
                }
                self.execute_json(builder) $( .$await_ext )?
            }

            /// Updates a booking's status, returning the updated record.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(booking = %id))]
            pub $($async_kw)? fn update_booking_status(
                &self,
                id: &BookingId,
                update: &StatusUpdate,
            ) -> Result<Booking> {
                let path = format!("{BOOKINGS_PATH}/{id}");
                self.execute_json(
                    self.request(Method::PATCH, &path).json(update),
                ) $( .$await_ext )?
            }

            // ── Categories & vendors ─────────────────────────────────

            /// Lists all categories.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn categories(&self) -> Result<Vec<Category>> {
                self.execute_json(self.request(Method::GET, CATEGORIES_PATH))
                    $( .$await_ext )?
            }

            /// Lists vendors, optionally filtered by category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn vendors(
                &self,
                category_id: Option<&CategoryId>,
            ) -> Result<Vec<Vendor>> {
                let mut builder = self.request(Method::GET, VENDORS_PATH);
                if let Some(id) = category_id {
                    builder = builder.query(&[("categoryId", id.as_inner())]);
                }
                self.execute_json(builder) $( .$await_ext )?
            }

            /// Fetches a single vendor by id.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(vendor = %id))]
            pub $($async_kw)? fn vendor(&self, id: &VendorId) -> Result<Vendor> {
                let path = format!("{VENDORS_PATH}/{id}");
                self.execute_json(self.request(Method::GET, &path))
                    $( .$await_ext )?
            }

            // ── Notifications ────────────────────────────────────────

            /// Lists the current user's notifications with the
            /// server-computed unread count.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn notifications(&self) -> Result<NotificationsPage> {
                self.execute_json(self.request(Method::GET, NOTIFICATIONS_PATH))
                    $( .$await_ext )?
            }

            /// Marks one notification as read, returning the updated
            /// record.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(notification = %id))]
            pub $($async_kw)? fn mark_notification_read(
                &self,
                id: &NotificationId,
            ) -> Result<Notification> {
                let path = format!("{NOTIFICATIONS_PATH}/{id}/read");
                self.execute_json(self.request(Method::PUT, &path))
                    $( .$await_ext )?
            }

            /// Marks every notification as read.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn mark_all_notifications_read(&self) -> Result<ApiMessage> {
                self.execute_json(
                    self.request(Method::PUT, NOTIFICATIONS_READ_ALL_PATH),
                ) $( .$await_ext )?
            }

            /// Deletes a notification.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(notification = %id))]
            pub $($async_kw)? fn delete_notification(
                &self,
                id: &NotificationId,
            ) -> Result<()> {
                let path = format!("{NOTIFICATIONS_PATH}/{id}");
                self.execute_no_content(self.request(Method::DELETE, &path))
                    $( .$await_ext )?
            }

            // ── Payments ─────────────────────────────────────────────

            /// Creates a payment order for the given amount.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn create_payment_order(
                &self,
                request: &CreateOrderRequest,
            ) -> Result<PaymentOrder> {
                self.execute_json(
                    self.request(Method::POST, PAYMENT_ORDERS_PATH).json(request),
                ) $( .$await_ext )?
            }

            /// Forwards a provider callback payload to the backend for
            /// signature verification.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn verify_payment(
                &self,
                callback: &PaymentCallback,
            ) -> Result<VerifyPaymentResponse> {
                self.execute_json(
                    self.request(Method::POST, PAYMENT_VERIFY_PATH).json(callback),
                ) $( .$await_ext )?
            }

            // ── Admin ────────────────────────────────────────────────

            /// Fetches aggregate dashboard counters.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn admin_stats(&self) -> Result<AdminStats> {
                self.execute_json(self.request(Method::GET, ADMIN_STATS_PATH))
                    $( .$await_ext )?
            }

            /// Lists all event listings.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn admin_events(&self) -> Result<Vec<Event>> {
                self.execute_json(self.request(Method::GET, ADMIN_EVENTS_PATH))
                    $( .$await_ext )?
            }

            /// Creates an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn create_event(&self, input: &EventInput) -> Result<Event> {
                self.execute_json(
                    self.request(Method::POST, ADMIN_EVENTS_PATH).json(input),
                ) $( .$await_ext )?
            }

            /// Updates an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(event = %id))]
            pub $($async_kw)? fn update_event(
                &self,
                id: &EventId,
                input: &EventInput,
            ) -> Result<Event> {
                let path = format!("{ADMIN_EVENTS_PATH}/{id}");
                self.execute_json(self.request(Method::PUT, &path).json(input))
                    $( .$await_ext )?
            }

            /// Deletes an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(event = %id))]
            pub $($async_kw)? fn delete_event(&self, id: &EventId) -> Result<()> {
                let path = format!("{ADMIN_EVENTS_PATH}/{id}");
                self.execute_no_content(self.request(Method::DELETE, &path))
                    $( .$await_ext )?
            }

            /// Lists all vendors through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn admin_vendors(&self) -> Result<Vec<Vendor>> {
                self.execute_json(self.request(Method::GET, ADMIN_VENDORS_PATH))
                    $( .$await_ext )?
            }

            /// Creates a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn create_vendor(&self, input: &VendorInput) -> Result<Vendor> {
                self.execute_json(
                    self.request(Method::POST, ADMIN_VENDORS_PATH).json(input),
                ) $( .$await_ext )?
            }

            /// Updates a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(vendor = %id))]
            pub $($async_kw)? fn update_vendor(
                &self,
                id: &VendorId,
                input: &VendorInput,
            ) -> Result<Vendor> {
                let path = format!("{ADMIN_VENDORS_PATH}/{id}");
                self.execute_json(self.request(Method::PUT, &path).json(input))
                    $( .$await_ext )?
            }

            /// Deletes a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(vendor = %id))]
            pub $($async_kw)? fn delete_vendor(&self, id: &VendorId) -> Result<()> {
                let path = format!("{ADMIN_VENDORS_PATH}/{id}");
                self.execute_no_content(self.request(Method::DELETE, &path))
                    $( .$await_ext )?
            }

            /// Lists all categories through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn admin_categories(&self) -> Result<Vec<Category>> {
                self.execute_json(self.request(Method::GET, ADMIN_CATEGORIES_PATH))
                    $( .$await_ext )?
            }

            /// Creates a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn create_category(
                &self,
                input: &CategoryInput,
            ) -> Result<Category> {
                self.execute_json(
                    self.request(Method::POST, ADMIN_CATEGORIES_PATH).json(input),
                ) $( .$await_ext )?
            }

            /// Updates a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(category = %id))]
            pub $($async_kw)? fn update_category(
                &self,
                id: &CategoryId,
                input: &CategoryInput,
            ) -> Result<Category> {
                let path = format!("{ADMIN_CATEGORIES_PATH}/{id}");
                self.execute_json(self.request(Method::PUT, &path).json(input))
                    $( .$await_ext )?
            }

            /// Deletes a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(category = %id))]
            pub $($async_kw)? fn delete_category(&self, id: &CategoryId) -> Result<()> {
                let path = format!("{ADMIN_CATEGORIES_PATH}/{id}");
                self.execute_no_content(self.request(Method::DELETE, &path))
                    $( .$await_ext )?
            }

            /// Lists all bookings through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn admin_bookings(&self) -> Result<Vec<Booking>> {
                self.execute_json(self.request(Method::GET, ADMIN_BOOKINGS_PATH))
                    $( .$await_ext )?
            }

            /// Updates a booking's status through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// returns a non-success status.
            #[inline]
            #[tracing::instrument(skip_all, fields(booking = %id))]
            pub $($async_kw)? fn admin_update_booking_status(
                &self,
                id: &BookingId,
                update: &StatusUpdate,
            ) -> Result<Booking> {
                let path = format!("{ADMIN_BOOKINGS_PATH}/{id}");
                self.execute_json(self.request(Method::PUT, &path).json(update))
                    $( .$await_ext )?
            }

            // ── Request plumbing ─────────────────────────────────────

            /// Starts a request builder for the given method and path,
            /// attaching the bearer header when a token is set.
            fn request(&self, method: Method, path: &str) -> $req_builder {
                let url = format!("{}{path}", self.base_url);
                tracing::trace!(url = %url, "preparing request");
                let mut builder = self
                    .http
                    .request(method, &url)
                    .header(CONTENT_TYPE, "application/json");
                if let Some(token) = self.token.as_deref() {
                    builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
                }
                builder
            }

            /// Sends a request and deserializes the JSON response.
            #[tracing::instrument(skip_all)]
            $($async_kw)? fn execute_json<Resp: serde::de::DeserializeOwned>(
                &self,
                builder: $req_builder,
            ) -> Result<Resp> {
                let response: $resp_type = builder.send() $( .$await_ext )? ?;
                let status = response.status();
                tracing::debug!(status = %status, "received response");
                if status.is_success() {
                    let body = response.text() $( .$await_ext )? ?;
                    tracing::trace!(body_len = body.len(), "parsing response body");
                    serde_json::from_str(&body).map_err(SlotifyError::from)
                } else {
                    let message = response
                        .text()
                        $( .$await_ext )?
                        .map_or_else(
                            |_| UNKNOWN_ERROR_MESSAGE.to_owned(),
                            |body| extract_error_message(&body),
                        );
                    tracing::debug!(status = status.as_u16(), message = %message, "API error");
                    Err(SlotifyError::Api {
                        status: status.as_u16(),
                        message,
                    })
                }
            }

            /// Sends a request and discards the response body.
            #[tracing::instrument(skip_all)]
            $($async_kw)? fn execute_no_content(
                &self,
                builder: $req_builder,
            ) -> Result<()> {
                let response: $resp_type = builder.send() $( .$await_ext )? ?;
                let status = response.status();
                tracing::debug!(status = %status, "received response");
                if status.is_success() {
                    Ok(())
                } else {
                    let message = response
                        .text()
                        $( .$await_ext )?
                        .map_or_else(
                            |_| UNKNOWN_ERROR_MESSAGE.to_owned(),
                            |body| extract_error_message(&body),
                        );
                    Err(SlotifyError::Api {
                        status: status.as_u16(),
                        message,
                    })
                }
            }
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[test]
            fn builder_without_token_succeeds() {
                let client = $client::builder().build().unwrap();
                assert!(!client.has_token());
                assert_eq!(client.base_url, DEFAULT_BASE_URL);
            }

            #[test]
            fn builder_with_token() {
                let client = $client::builder().token("test-token").build().unwrap();
                assert!(client.has_token());
            }

            #[test]
            fn builder_custom_base_url() {
                let client = $client::builder()
                    .base_url("http://localhost:8080")
                    .build()
                    .unwrap();
                assert_eq!(client.base_url, "http://localhost:8080");
            }

            #[test]
            fn set_token_toggles() {
                let mut client = $client::builder().build().unwrap();
                client.set_token(Some("t1".to_owned()));
                assert!(client.has_token());
                client.set_token(None);
                assert!(!client.has_token());
            }
        }
    };
}

#[cfg(feature = "async")]
mod async_client {
    //! Async HTTP client for the Slotify API.

    use reqwest::Method;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

    use super::{
        ADMIN_BOOKINGS_PATH, ADMIN_CATEGORIES_PATH, ADMIN_EVENTS_PATH, ADMIN_STATS_PATH,
        ADMIN_VENDORS_PATH, BOOKINGS_PATH, CATEGORIES_PATH, DEFAULT_BASE_URL, MY_BOOKINGS_PATH,
        NOTIFICATIONS_PATH, NOTIFICATIONS_READ_ALL_PATH, PAYMENT_ORDERS_PATH, PAYMENT_VERIFY_PATH,
        PROFILE_PATH, SEND_OTP_PATH, UNKNOWN_ERROR_MESSAGE, VENDORS_PATH, VERIFY_OTP_PATH,
        extract_error_message,
    };
    use crate::error::{Result, SlotifyError};
    use crate::models::{
        AdminStats, ApiMessage, Booking, BookingId, Category, CategoryId, CategoryInput,
        CreateBookingRequest, CreateOrderRequest, Event, EventId, EventInput, Notification,
        NotificationId, NotificationsPage, PaymentCallback, PaymentOrder, Profile, SendOtpRequest,
        StatusUpdate, UpdateProfileRequest, Vendor, VendorId, VendorInput, VerifyOtpRequest,
        VerifyPaymentResponse,
    };

    define_client! {
        client_name: SlotifyClient,
        builder_name: SlotifyClientBuilder,
        http_type: reqwest::Client,
        request_builder_type: reqwest::RequestBuilder,
        response_type: reqwest::Response,
        client_doc: "Async client for the Slotify API.\n\nUse [`SlotifyClient::builder()`] to construct an instance.",
        builder_doc: "Builder for constructing a [`SlotifyClient`].",
        async_kw: async,
        await_kw: await,
    }
}

#[cfg(feature = "blocking")]
mod blocking_client {
    //! Blocking (synchronous) HTTP client for the Slotify API.

    use reqwest::Method;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

    use super::{
        ADMIN_BOOKINGS_PATH, ADMIN_CATEGORIES_PATH, ADMIN_EVENTS_PATH, ADMIN_STATS_PATH,
        ADMIN_VENDORS_PATH, BOOKINGS_PATH, CATEGORIES_PATH, DEFAULT_BASE_URL, MY_BOOKINGS_PATH,
        NOTIFICATIONS_PATH, NOTIFICATIONS_READ_ALL_PATH, PAYMENT_ORDERS_PATH, PAYMENT_VERIFY_PATH,
        PROFILE_PATH, SEND_OTP_PATH, UNKNOWN_ERROR_MESSAGE, VENDORS_PATH, VERIFY_OTP_PATH,
        extract_error_message,
    };
    use crate::error::{Result, SlotifyError};
    use crate::models::{
        AdminStats, ApiMessage, Booking, BookingId, Category, CategoryId, CategoryInput,
        CreateBookingRequest, CreateOrderRequest, Event, EventId, EventInput, Notification,
        NotificationId, NotificationsPage, PaymentCallback, PaymentOrder, Profile, SendOtpRequest,
        StatusUpdate, UpdateProfileRequest, Vendor, VendorId, VendorInput, VerifyOtpRequest,
        VerifyPaymentResponse,
    };

    define_client! {
        client_name: SlotifyBlockingClient,
        builder_name: SlotifyBlockingClientBuilder,
        http_type: reqwest::blocking::Client,
        request_builder_type: reqwest::blocking::RequestBuilder,
        response_type: reqwest::blocking::Response,
        client_doc: "Blocking (synchronous) client for the Slotify API.\n\nUse [`SlotifyBlockingClient::builder()`] to construct an instance.",
        builder_doc: "Builder for constructing a [`SlotifyBlockingClient`].",
    }
}

#[cfg(feature = "async")]
pub use async_client::{SlotifyClient, SlotifyClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{SlotifyBlockingClient, SlotifyBlockingClientBuilder};
