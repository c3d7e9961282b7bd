//! Data models for Slotify API entities.
//!
//! This module contains strongly-typed representations of all Slotify
//! entities, newtype ID wrappers, enumeration types for constrained
//! values, and the sum types for denormalized reference fields.

mod admin;
mod auth;
mod booking;
mod category;
mod enums;
mod event;
mod ids;
mod notification;
mod payment;
mod refs;
mod user;
mod vendor;

pub use admin::AdminStats;
pub use auth::{ApiMessage, SendOtpRequest, VerifyOtpRequest};
pub use booking::{Booking, CreateBookingRequest, StatusUpdate};
pub use category::{Category, CategoryInput};
pub use chrono::NaiveDate;
pub use enums::{BookingStatus, EventStatus};
pub use event::{Event, EventInput};
pub use ids::{BookingId, CategoryId, EventId, NotificationId, OrderId, UserId, VendorId};
pub use notification::{Notification, NotificationsPage};
pub use payment::{
    CreateOrderRequest, PAYMENT_VERIFIED_MESSAGE, PaymentCallback, PaymentOrder,
    VerifyPaymentResponse,
};
pub use refs::{CategoryRef, VendorRef};
pub use user::{Profile, UpdateProfileRequest};
pub use vendor::{Vendor, VendorInput};
