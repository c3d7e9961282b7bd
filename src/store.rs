//! High-level store: HTTP client + profile storage + application state.
//!
//! The store is the imperative shell around the pure slices in
//! [`crate::state`]: each operation dispatches the *pending* action,
//! performs the HTTP call, then dispatches *fulfilled* or *rejected*
//! and returns the outcome to the caller. Construction hydrates the
//! session from the persisted profile blob, mirroring the startup path
//! of the original front-end.
//!
//! Operations take `&mut self`, so a store is single-owner and its
//! dispatches are serialized — matching the single UI thread of the
//! original. There is no in-flight de-duplication and no request
//! fencing: callers that interleave stores or clone data race exactly
//! as the original did, with the last-settled response winning.

/// Extracts the user-facing message recorded in slice errors: the
/// backend's message for API rejections, the display string otherwise.
#[cfg(any(feature = "async", feature = "blocking"))]
fn error_message(err: &crate::error::SlotifyError) -> String {
    if let crate::error::SlotifyError::Api { message, .. } = err {
        message.clone()
    } else {
        err.to_string()
    }
}

/// Generates a high-level Slotify store (async or blocking).
macro_rules! define_store {
    (
        store_name: $store:ident,
        builder_name: $builder:ident,
        http_client: $http_client:ty,
        store_doc: $store_doc:expr,
        builder_doc: $builder_doc:expr,
        $(async_kw: $async_kw:tt,)?
        $(await_kw: $await_ext:tt,)?
    ) => {
        #[doc = $builder_doc]
        #[derive(Debug)]
        pub struct $builder<S: ProfileStore> {
            /// Base URL override (per deployment, or for testing).
            base_url: Option<String>,
            /// Profile storage backend.
            profile_store: Option<S>,
        }

        impl<S: ProfileStore> $builder<S> {
            /// Overrides the base URL (per deployment, or for testing
            /// with a mock server).
            #[inline]
            #[must_use]
            pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
                self.base_url = Some(url.into());
                self
            }

            /// Sets the profile storage backend.
            #[inline]
            #[must_use]
            pub fn profile_store(mut self, store: S) -> Self {
                self.profile_store = Some(store);
                self
            }

            /// Builds the store, restoring a persisted session if the
            /// storage backend holds one.
            ///
            /// # Errors
            ///
            /// Returns [`SlotifyError::Storage`] if no profile store was
            /// provided or it fails to read, and [`SlotifyError::Http`]
            /// if the HTTP client fails to build.
            #[tracing::instrument(skip_all)]
            pub fn build(self) -> Result<$store<S>> {
                let profiles = self.profile_store.ok_or_else(|| {
                    SlotifyError::Storage("profile store is required".into())
                })?;
                let persisted = profiles.load()?;
                tracing::debug!(restored = persisted.is_some(), "hydrating session");

                let mut client_builder = <$http_client>::builder();
                if let Some(url) = self.base_url {
                    client_builder = client_builder.base_url(url);
                }
                if let Some(profile) = &persisted {
                    client_builder = client_builder.token(profile.token.clone());
                }
                let client = client_builder.build()?;

                let mut state = AppState::new();
                if let Some(profile) = persisted {
                    state.apply(Action::Auth(AuthAction::SetUser(profile)));
                }

                Ok($store {
                    client,
                    profiles,
                    state,
                })
            }
        }

        #[doc = $store_doc]
        #[derive(Debug)]
        pub struct $store<S: ProfileStore> {
            /// Low-level HTTP client.
            client: $http_client,
            /// Profile storage backend.
            profiles: S,
            /// The composed application state.
            state: AppState,
        }

        impl<S: ProfileStore> $store<S> {
            /// Creates a new builder for configuring the store.
            #[inline]
            #[must_use]
            pub const fn builder() -> $builder<S> {
                $builder {
                    base_url: None,
                    profile_store: None,
                }
            }

            /// Returns the current application state for view bindings.
            #[inline]
            #[must_use]
            pub const fn state(&self) -> &AppState {
                &self.state
            }

            /// Returns `true` when a session is active.
            #[inline]
            #[must_use]
            pub const fn is_authenticated(&self) -> bool {
                self.state.auth.is_authenticated
            }

            /// Returns a reference to the underlying HTTP client.
            #[inline]
            #[must_use]
            pub const fn inner_client(&self) -> &$http_client {
                &self.client
            }

            /// Returns a reference to the profile storage backend.
            #[inline]
            #[must_use]
            pub const fn profile_store(&self) -> &S {
                &self.profiles
            }

            // ── Auth operations ──────────────────────────────────────

            /// Requests a one-time passcode for the given email.
            ///
            /// Success carries no cache change; the caller advances the
            /// login step when this resolves.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the server
            /// rejects the address. The message is also recorded in the
            /// auth slice.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn send_otp(&mut self, email: &str) -> Result<()> {
                self.state.apply(Action::Auth(AuthAction::SendOtpPending));
                let request = SendOtpRequest::new(email);
                match self.client.send_otp(&request) $( .$await_ext )? {
                    Ok(_ack) => {
                        self.state.apply(Action::Auth(AuthAction::SendOtpFulfilled));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Auth(AuthAction::SendOtpRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Exchanges the email + passcode pair for a session.
            ///
            /// On success the returned profile is persisted to the
            /// profile store and subsequent requests carry its token.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails, the passcode
            /// is rejected, or the profile cannot be persisted.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn verify_otp(&mut self, email: &str, otp: &str) -> Result<()> {
                self.state.apply(Action::Auth(AuthAction::VerifyOtpPending));
                let request = VerifyOtpRequest::new(email, otp);
                match self.client.verify_otp(&request) $( .$await_ext )? {
                    Ok(profile) => {
                        if let Err(err) = self.profiles.save(&profile) {
                            self.state.apply(Action::Auth(AuthAction::VerifyOtpRejected(
                                error_message(&err),
                            )));
                            return Err(err);
                        }
                        self.client.set_token(Some(profile.token.clone()));
                        self.state
                            .apply(Action::Auth(AuthAction::VerifyOtpFulfilled(profile)));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Auth(AuthAction::VerifyOtpRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Updates the authenticated user's profile and re-persists
            /// the returned blob.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails or the profile
            /// cannot be persisted.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn update_profile(
                &mut self,
                request: &UpdateProfileRequest,
            ) -> Result<()> {
                self.state.apply(Action::Auth(AuthAction::UpdateProfilePending));
                match self.client.update_profile(request) $( .$await_ext )? {
                    Ok(profile) => {
                        if let Err(err) = self.profiles.save(&profile) {
                            self.state.apply(Action::Auth(AuthAction::UpdateProfileRejected(
                                error_message(&err),
                            )));
                            return Err(err);
                        }
                        self.client.set_token(Some(profile.token.clone()));
                        self.state
                            .apply(Action::Auth(AuthAction::UpdateProfileFulfilled(profile)));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Auth(AuthAction::UpdateProfileRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Ends the session: clears the persisted profile and the
            /// in-memory auth state.
            ///
            /// # Errors
            ///
            /// Returns an error if the profile store fails to clear; the
            /// in-memory session is left intact in that case so the
            /// failure is visible and retryable.
            #[tracing::instrument(skip_all)]
            pub fn logout(&mut self) -> Result<()> {
                self.profiles.clear()?;
                self.client.set_token(None);
                self.state.apply(Action::Auth(AuthAction::Logout));
                Ok(())
            }

            // ── Category operations ──────────────────────────────────

            /// Fetches all categories into the category slice.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice and the stale list is kept.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn fetch_categories(&mut self) -> Result<()> {
                self.state.apply(Action::Category(CategoryAction::FetchPending));
                match self.client.categories() $( .$await_ext )? {
                    Ok(categories) => {
                        self.state.apply(Action::Category(CategoryAction::FetchFulfilled(
                            categories,
                        )));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Category(CategoryAction::FetchRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            // ── Vendor operations ────────────────────────────────────

            /// Fetches vendors into the vendor slice, optionally
            /// filtered by category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice and the stale list is kept.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn fetch_vendors(
                &mut self,
                category_id: Option<&CategoryId>,
            ) -> Result<()> {
                self.state.apply(Action::Vendor(VendorAction::FetchListPending));
                match self.client.vendors(category_id) $( .$await_ext )? {
                    Ok(vendors) => {
                        self.state.apply(Action::Vendor(VendorAction::FetchListFulfilled(
                            vendors,
                        )));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Vendor(VendorAction::FetchListRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Fetches one vendor into the selected-vendor cache.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice.
            #[tracing::instrument(skip_all, fields(vendor = %id))]
            pub $($async_kw)? fn fetch_vendor(&mut self, id: &VendorId) -> Result<()> {
                self.state.apply(Action::Vendor(VendorAction::FetchSelectedPending));
                match self.client.vendor(id) $( .$await_ext )? {
                    Ok(vendor) => {
                        self.state.apply(Action::Vendor(
                            VendorAction::FetchSelectedFulfilled(Box::new(vendor)),
                        ));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Vendor(
                            VendorAction::FetchSelectedRejected(error_message(&err)),
                        ));
                        Err(err)
                    }
                }
            }

            /// Clears the selected-vendor cache (leaving a detail view).
            #[inline]
            pub fn clear_selected_vendor(&mut self) {
                self.state.apply(Action::Vendor(VendorAction::ClearSelected));
            }

            // ── Booking operations ───────────────────────────────────

            /// Fetches the current user's own bookings.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice and the stale list is kept.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn fetch_my_bookings(&mut self) -> Result<()> {
                self.state.apply(Action::Booking(BookingAction::FetchPending));
                match self.client.my_bookings() $( .$await_ext )? {
                    Ok(bookings) => {
                        self.state.apply(Action::Booking(BookingAction::FetchFulfilled {
                            scope: BookingScope::User,
                            bookings,
                        }));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Booking(BookingAction::FetchRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Fetches bookings addressed to a vendor into the same
            /// cache (last fetch wins across scopes).
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice and the stale list is kept.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn fetch_vendor_bookings(
                &mut self,
                vendor_id: Option<&VendorId>,
            ) -> Result<()> {
                self.state.apply(Action::Booking(BookingAction::FetchPending));
                match self.client.vendor_bookings(vendor_id) $( .$await_ext )? {
                    Ok(bookings) => {
                        self.state.apply(Action::Booking(BookingAction::FetchFulfilled {
                            scope: BookingScope::Vendor,
                            bookings,
                        }));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Booking(BookingAction::FetchRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            /// Updates a booking's status; the cached record is replaced
            /// in place (ids not present in the cache are not inserted).
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice.
            #[tracing::instrument(skip_all, fields(booking = %id))]
            pub $($async_kw)? fn change_booking_status(
                &mut self,
                id: &BookingId,
                status: BookingStatus,
            ) -> Result<()> {
                self.state.apply(Action::Booking(BookingAction::StatusPending));
                let update = StatusUpdate { status };
                match self.client.update_booking_status(id, &update) $( .$await_ext )? {
                    Ok(booking) => {
                        self.state.apply(Action::Booking(BookingAction::StatusFulfilled(
                            Box::new(booking),
                        )));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Booking(BookingAction::StatusRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            // ── Checkout operations ──────────────────────────────────

            /// The pay-later path: validates the form locally, then
            /// creates the booking with status `pending`. An invalid
            /// form is rejected before any network call.
            ///
            /// # Errors
            ///
            /// Returns [`SlotifyError::Validation`] when a required
            /// field is missing, or the HTTP error if the create call
            /// fails.
            #[tracing::instrument(skip_all, fields(vendor = %vendor_id))]
            pub $($async_kw)? fn book_pay_later(
                &mut self,
                vendor_id: VendorId,
                form: &BookingForm,
            ) -> Result<Booking> {
                let request = form.validate(vendor_id, BookingStatus::Pending)?;
                self.create_booking(&request) $( .$await_ext )?
            }

            /// Step 1 of the paid path: creates a payment order for the
            /// given amount, to be handed to the payment widget.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails. Nothing is
            /// created yet, so the flow simply aborts.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn begin_checkout(&self, amount: f64) -> Result<PaymentOrder> {
                let request = CreateOrderRequest { amount };
                self.client.create_payment_order(&request) $( .$await_ext )?
            }

            /// Steps 3–4 of the paid path: forwards the widget callback
            /// to the backend for verification and, only when the verify
            /// message equals the exact success string, creates the
            /// booking with status `confirmed`.
            ///
            /// # Errors
            ///
            /// Returns [`SlotifyError::PaymentNotVerified`] when the
            /// verify message differs (no booking is created), or the
            /// HTTP error of a failed step. A create failure after a
            /// verified payment records the contact-support message in
            /// the booking slice — the payment is captured and the
            /// client cannot reconcile it.
            #[tracing::instrument(skip_all, fields(vendor = %vendor_id))]
            pub $($async_kw)? fn complete_checkout(
                &mut self,
                callback: &PaymentCallback,
                vendor_id: VendorId,
                form: &BookingForm,
            ) -> Result<Booking> {
                let request = form.validate(vendor_id, BookingStatus::Confirmed)?;
                let verification = self.client.verify_payment(callback) $( .$await_ext )? ?;
                if !verification.is_verified() {
                    tracing::warn!(message = %verification.message, "payment verification failed");
                    return Err(SlotifyError::PaymentNotVerified {
                        message: verification.message,
                    });
                }
                self.state.apply(Action::Booking(BookingAction::CreatePending));
                match self.client.create_booking(&request) $( .$await_ext )? {
                    Ok(booking) => {
                        self.state.apply(Action::Booking(BookingAction::CreateFulfilled(
                            Box::new(booking.clone()),
                        )));
                        Ok(booking)
                    }
                    Err(err) => {
                        tracing::error!("booking creation failed after verified payment");
                        self.state.apply(Action::Booking(BookingAction::CreateRejected(
                            CONTACT_SUPPORT_MESSAGE.to_owned(),
                        )));
                        Err(err)
                    }
                }
            }

            /// Creates a booking from an already-validated request and
            /// appends it to the cache.
            #[tracing::instrument(skip_all)]
            $($async_kw)? fn create_booking(
                &mut self,
                request: &CreateBookingRequest,
            ) -> Result<Booking> {
                self.state.apply(Action::Booking(BookingAction::CreatePending));
                match self.client.create_booking(request) $( .$await_ext )? {
                    Ok(booking) => {
                        self.state.apply(Action::Booking(BookingAction::CreateFulfilled(
                            Box::new(booking.clone()),
                        )));
                        Ok(booking)
                    }
                    Err(err) => {
                        self.state.apply(Action::Booking(BookingAction::CreateRejected(
                            error_message(&err),
                        )));
                        Err(err)
                    }
                }
            }

            // ── Notification operations ──────────────────────────────

            /// Fetches notifications and the unread count atomically
            /// from one backend response.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the message is
            /// also recorded in the slice and stale items are kept.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn fetch_notifications(&mut self) -> Result<()> {
                self.state
                    .apply(Action::Notification(NotificationAction::FetchPending));
                match self.client.notifications() $( .$await_ext )? {
                    Ok(page) => {
                        self.state.apply(Action::Notification(
                            NotificationAction::FetchFulfilled(page),
                        ));
                        Ok(())
                    }
                    Err(err) => {
                        self.state.apply(Action::Notification(
                            NotificationAction::FetchRejected(error_message(&err)),
                        ));
                        Err(err)
                    }
                }
            }

            /// Marks one notification as read after backend
            /// confirmation; the unread count drops only if the item
            /// was previously unread.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the cache is
            /// left untouched in that case.
            #[tracing::instrument(skip_all, fields(notification = %id))]
            pub $($async_kw)? fn mark_notification_read(
                &mut self,
                id: &NotificationId,
            ) -> Result<()> {
                let updated = self.client.mark_notification_read(id) $( .$await_ext )? ?;
                self.state.apply(Action::Notification(
                    NotificationAction::MarkReadFulfilled(updated),
                ));
                Ok(())
            }

            /// Marks every notification as read after backend
            /// confirmation; the unread count becomes zero.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the cache is
            /// left untouched in that case.
            #[tracing::instrument(skip_all)]
            pub $($async_kw)? fn mark_all_notifications_read(&mut self) -> Result<()> {
                let _ack = self.client.mark_all_notifications_read() $( .$await_ext )? ?;
                self.state
                    .apply(Action::Notification(NotificationAction::MarkAllReadFulfilled));
                Ok(())
            }

            /// Deletes a notification after backend confirmation; the
            /// unread count drops only if the item was unread.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails; the cache is
            /// left untouched in that case.
            #[tracing::instrument(skip_all, fields(notification = %id))]
            pub $($async_kw)? fn delete_notification(
                &mut self,
                id: &NotificationId,
            ) -> Result<()> {
                self.client.delete_notification(id) $( .$await_ext )? ?;
                self.state.apply(Action::Notification(
                    NotificationAction::DeleteFulfilled(id.clone()),
                ));
                Ok(())
            }

            /// Pushes a server-delivered notification to the front of
            /// the list and bumps the unread count. Reserved for future
            /// real-time delivery; no transport is wired up here.
            #[inline]
            pub fn push_notification(&mut self, notification: Notification) {
                self.state
                    .apply(Action::Notification(NotificationAction::Push(notification)));
            }

            // ── Admin operations (stateless pass-throughs) ───────────
            //
            // The admin surface keeps no slice cache; callers refetch
            // the affected list and the stats after each mutation.

            /// Fetches the aggregate dashboard counters.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_stats(&self) -> Result<AdminStats> {
                self.client.admin_stats() $( .$await_ext )?
            }

            /// Lists all event listings.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_events(&self) -> Result<Vec<Event>> {
                self.client.admin_events() $( .$await_ext )?
            }

            /// Creates an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn create_event(&self, input: &EventInput) -> Result<Event> {
                self.client.create_event(input) $( .$await_ext )?
            }

            /// Updates an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn update_event(
                &self,
                id: &EventId,
                input: &EventInput,
            ) -> Result<Event> {
                self.client.update_event(id, input) $( .$await_ext )?
            }

            /// Deletes an event listing.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn delete_event(&self, id: &EventId) -> Result<()> {
                self.client.delete_event(id) $( .$await_ext )?
            }

            /// Lists all vendors through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_vendors(&self) -> Result<Vec<Vendor>> {
                self.client.admin_vendors() $( .$await_ext )?
            }

            /// Creates a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn create_vendor(&self, input: &VendorInput) -> Result<Vendor> {
                self.client.create_vendor(input) $( .$await_ext )?
            }

            /// Updates a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn update_vendor(
                &self,
                id: &VendorId,
                input: &VendorInput,
            ) -> Result<Vendor> {
                self.client.update_vendor(id, input) $( .$await_ext )?
            }

            /// Deletes a vendor.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn delete_vendor(&self, id: &VendorId) -> Result<()> {
                self.client.delete_vendor(id) $( .$await_ext )?
            }

            /// Lists all categories through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_categories(&self) -> Result<Vec<Category>> {
                self.client.admin_categories() $( .$await_ext )?
            }

            /// Creates a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn create_category(
                &self,
                input: &CategoryInput,
            ) -> Result<Category> {
                self.client.create_category(input) $( .$await_ext )?
            }

            /// Updates a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn update_category(
                &self,
                id: &CategoryId,
                input: &CategoryInput,
            ) -> Result<Category> {
                self.client.update_category(id, input) $( .$await_ext )?
            }

            /// Deletes a category.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn delete_category(&self, id: &CategoryId) -> Result<()> {
                self.client.delete_category(id) $( .$await_ext )?
            }

            /// Lists all bookings through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_bookings(&self) -> Result<Vec<Booking>> {
                self.client.admin_bookings() $( .$await_ext )?
            }

            /// Updates a booking's status through the admin namespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the HTTP request fails.
            #[inline]
            pub $($async_kw)? fn admin_set_booking_status(
                &self,
                id: &BookingId,
                status: BookingStatus,
            ) -> Result<Booking> {
                let update = StatusUpdate { status };
                self.client.admin_update_booking_status(id, &update) $( .$await_ext )?
            }
        }
    };
}

// ── Async variant ───────────────────────────────────────────────────────

#[cfg(feature = "async")]
mod async_store {
    //! Async high-level store.

    use crate::client::SlotifyClient;
    use crate::error::{Result, SlotifyError};
    use crate::flow::{BookingForm, CONTACT_SUPPORT_MESSAGE};
    use crate::models::{
        AdminStats, Booking, BookingId, BookingStatus, Category, CategoryId, CategoryInput,
        CreateBookingRequest, CreateOrderRequest, Event, EventId, EventInput, Notification,
        NotificationId, PaymentCallback, PaymentOrder, SendOtpRequest, StatusUpdate,
        UpdateProfileRequest, Vendor, VendorId, VendorInput, VerifyOtpRequest,
    };
    use crate::state::{
        Action, AppState, AuthAction, BookingAction, BookingScope, CategoryAction,
        NotificationAction, Slice as _, VendorAction,
    };
    use crate::storage::ProfileStore;

    use super::error_message;

    define_store! {
        store_name: Store,
        builder_name: StoreBuilder,
        http_client: SlotifyClient,
        store_doc: "High-level async store combining the HTTP client, profile storage, and application state.\n\nUse [`Store::builder()`] to construct an instance.",
        builder_doc: "Builder for constructing a [`Store`].",
        async_kw: async,
        await_kw: await,
    }
}

// ── Blocking variant ────────────────────────────────────────────────────

#[cfg(feature = "blocking")]
mod blocking_store {
    //! Blocking high-level store.

    use crate::client::SlotifyBlockingClient;
    use crate::error::{Result, SlotifyError};
    use crate::flow::{BookingForm, CONTACT_SUPPORT_MESSAGE};
    use crate::models::{
        AdminStats, Booking, BookingId, BookingStatus, Category, CategoryId, CategoryInput,
        CreateBookingRequest, CreateOrderRequest, Event, EventId, EventInput, Notification,
        NotificationId, PaymentCallback, PaymentOrder, SendOtpRequest, StatusUpdate,
        UpdateProfileRequest, Vendor, VendorId, VendorInput, VerifyOtpRequest,
    };
    use crate::state::{
        Action, AppState, AuthAction, BookingAction, BookingScope, CategoryAction,
        NotificationAction, Slice as _, VendorAction,
    };
    use crate::storage::ProfileStore;

    use super::error_message;

    define_store! {
        store_name: BlockingStore,
        builder_name: BlockingStoreBuilder,
        http_client: SlotifyBlockingClient,
        store_doc: "High-level blocking store combining the HTTP client, profile storage, and application state.\n\nUse [`BlockingStore::builder()`] to construct an instance.",
        builder_doc: "Builder for constructing a [`BlockingStore`].",
    }
}

#[cfg(feature = "async")]
pub use async_store::{Store, StoreBuilder};
#[cfg(feature = "blocking")]
pub use blocking_store::{BlockingStore, BlockingStoreBuilder};

#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;
    use crate::error::SlotifyError;
    use crate::flow::BookingForm;
    use crate::models::{PaymentCallback, VendorId};
    use crate::storage::{InMemoryProfileStore, ProfileStore as _};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Builds an async store backed by an in-memory profile store and
    /// the given mock server.
    fn test_store(server: &MockServer) -> Store<InMemoryProfileStore> {
        Store::builder()
            .base_url(server.uri())
            .profile_store(InMemoryProfileStore::new())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn verify_otp_persists_exact_profile_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-otp"))
            .and(body_json(
                serde_json::json!({"email": "a@b.com", "otp": "123456"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"name": "A", "email": "a@b.com", "token": "t1"}),
            ))
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        store.verify_otp("a@b.com", "123456").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.state().auth.token(), Some("t1"));

        let persisted = store.profile_store().load().unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&persisted).unwrap(),
            serde_json::json!({"name": "A", "email": "a@b.com", "token": "t1"})
        );
    }

    #[tokio::test]
    async fn send_otp_rejection_records_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/send-otp"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "Email is required"})),
            )
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        let err = store.send_otp("").await.unwrap_err();
        assert!(matches!(err, SlotifyError::Api { status: 400, .. }));
        assert_eq!(
            store.state().auth.error.as_deref(),
            Some("Email is required")
        );
        assert!(!store.state().auth.loading);
    }

    #[cfg(feature = "storage-file")]
    #[tokio::test]
    async fn logout_clears_persisted_profile_and_restart_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-otp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"name": "A", "email": "a@b.com", "token": "t1"}),
            ))
            .mount(&server)
            .await;

        let file_store = |dir: &std::path::Path| {
            crate::storage::FileProfileStore::new(dir.to_path_buf()).unwrap()
        };

        let mut store = Store::builder()
            .base_url(server.uri())
            .profile_store(file_store(dir.path()))
            .build()
            .unwrap();
        store.verify_otp("a@b.com", "123456").await.unwrap();
        drop(store);

        // A restart restores the session from the blob.
        let mut restored = Store::builder()
            .base_url(server.uri())
            .profile_store(file_store(dir.path()))
            .build()
            .unwrap();
        assert!(restored.is_authenticated());

        restored.logout().unwrap();
        assert!(!restored.is_authenticated());
        drop(restored);

        // After logout a restart must not restore anything.
        let fresh = Store::builder()
            .base_url(server.uri())
            .profile_store(file_store(dir.path()))
            .build()
            .unwrap();
        assert!(!fresh.is_authenticated());
        assert!(fresh.profile_store().load().unwrap().is_none());
    }

    #[tokio::test]
    async fn restored_session_attaches_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bookings/my-bookings"))
            .and(header("Authorization", "Bearer persisted-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let profiles = InMemoryProfileStore::new();
        profiles
            .save(&crate::models::Profile {
                id: None,
                name: "A".to_owned(),
                email: "a@b.com".to_owned(),
                phone: None,
                role: None,
                token: "persisted-token".to_owned(),
            })
            .unwrap();

        let mut store = Store::builder()
            .base_url(server.uri())
            .profile_store(profiles)
            .build()
            .unwrap();
        store.fetch_my_bookings().await.unwrap();
    }

    #[tokio::test]
    async fn fetch_categories_empty_list_enters_demo_mode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        store.fetch_categories().await.unwrap();
        assert!(store.state().category.is_demo());
        assert_eq!(store.state().category.display_categories().len(), 4);
    }

    #[tokio::test]
    async fn pay_later_with_empty_name_is_blocked_before_any_request() {
        let server = MockServer::start().await;

        let mut store = test_store(&server);
        let form = BookingForm {
            user_name: String::new(),
            user_email: "a@b.com".to_owned(),
            user_phone: String::new(),
            event_date: "2026-11-20".to_owned(),
            notes: String::new(),
        };
        let vendor_id = VendorId::new(uuid::Uuid::new_v4().to_string());
        let err = store.book_pay_later(vendor_id, &form).await.unwrap_err();
        assert!(matches!(
            err,
            SlotifyError::Validation { field: "userName" }
        ));

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn pay_later_creates_pending_booking_and_appends() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "_id": "b-1",
                "vendorId": "v-1",
                "userName": "Asha",
                "userEmail": "a@b.com",
                "eventDate": "2026-11-20",
                "status": "pending"
            })))
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        let form = BookingForm {
            user_name: "Asha".to_owned(),
            user_email: "a@b.com".to_owned(),
            user_phone: String::new(),
            event_date: "2026-11-20".to_owned(),
            notes: String::new(),
        };
        let booking = store
            .book_pay_later(VendorId::new("v-1".to_owned()), &form)
            .await
            .unwrap();
        assert_eq!(booking.status, crate::models::BookingStatus::Pending);
        assert_eq!(store.state().booking.bookings.len(), 1);
    }

    #[tokio::test]
    async fn checkout_with_unverified_payment_never_creates_booking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/verify"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "Signature mismatch"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        // The booking endpoint must never be hit.
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        let form = BookingForm {
            user_name: "Asha".to_owned(),
            user_email: "a@b.com".to_owned(),
            user_phone: String::new(),
            event_date: "2026-11-20".to_owned(),
            notes: String::new(),
        };
        let callback = PaymentCallback {
            razorpay_order_id: "order_1".to_owned(),
            razorpay_payment_id: "pay_1".to_owned(),
            razorpay_signature: "sig".to_owned(),
        };
        let err = store
            .complete_checkout(&callback, VendorId::new("v-1".to_owned()), &form)
            .await
            .unwrap_err();
        assert!(matches!(err, SlotifyError::PaymentNotVerified { .. }));
        assert!(store.state().booking.bookings.is_empty());
    }

    #[tokio::test]
    async fn fetch_notifications_keeps_unread_invariant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "notifications": [
                    {"_id": "n-1", "message": "A", "read": false, "createdAt": "2026-08-01T10:30:00Z"},
                    {"_id": "n-2", "message": "B", "read": true, "createdAt": "2026-08-01T09:00:00Z"}
                ],
                "unreadCount": 1
            })))
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        store.fetch_notifications().await.unwrap();
        let slice = &store.state().notification;
        assert_eq!(slice.unread_count, 1);
        assert_eq!(slice.items.iter().filter(|n| !n.read).count(), 1);
    }

    #[tokio::test]
    async fn rejected_fetch_keeps_stale_bookings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bookings/my-bookings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "_id": "b-1",
                "vendorId": "v-1",
                "userName": "Asha",
                "userEmail": "a@b.com",
                "eventDate": "2026-11-20",
                "status": "pending"
            }])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bookings"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "boom"})),
            )
            .mount(&server)
            .await;

        let mut store = test_store(&server);
        store.fetch_my_bookings().await.unwrap();
        assert_eq!(store.state().booking.bookings.len(), 1);

        let err = store.fetch_vendor_bookings(None).await.unwrap_err();
        assert!(matches!(err, SlotifyError::Api { status: 500, .. }));
        // Stale-but-present: the prior list survives the failure.
        assert_eq!(store.state().booking.bookings.len(), 1);
        assert_eq!(store.state().booking.error.as_deref(), Some("boom"));
    }
}
