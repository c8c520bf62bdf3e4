use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use super::{AuthSession, BookingApi};
use crate::calendar::date::format_day;
use crate::models::{Booking, NewBooking, ReservationSpan, Room};

/// Thin client for the hosted Supabase backend: PostgREST for tables, GoTrue
/// for password sign-in.
pub struct SupabaseBackend {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseBackend {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            client: reqwest::Client::new(),
        }
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.base_url)
    }

    /// Rows are read with the anon key; writes carry the user's token.
    fn bearer<'a>(&'a self, session: Option<&'a AuthSession>) -> &'a str {
        session.map_or(self.anon_key.as_str(), |s| s.access_token.as_str())
    }

    async fn get_rows<T: serde::de::DeserializeOwned>(&self, url: String) -> anyhow::Result<T> {
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await
            .with_context(|| format!("failed to call {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("backend error ({status}): {body}");
        }

        resp.json().await.context("failed to parse backend response")
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> anyhow::Result<AuthSession> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("failed to call auth endpoint")?;

        let status = resp.status();
        let data: serde_json::Value = resp.json().await.context("failed to parse auth response")?;
        if !status.is_success() {
            anyhow::bail!("sign-in failed ({status}): {data}");
        }

        let access_token = data["access_token"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing access_token in auth response"))?
            .to_string();
        let user_id = data["user"]["id"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing user id in auth response"))?
            .to_string();

        Ok(AuthSession {
            user_id,
            access_token,
        })
    }
}

#[async_trait]
impl BookingApi for SupabaseBackend {
    async fn fetch_rooms(&self) -> anyhow::Result<Vec<Room>> {
        self.get_rows(self.rest_url("rooms?select=*&order=room_number.asc"))
            .await
    }

    async fn fetch_room(&self, room_id: &str) -> anyhow::Result<Room> {
        let rooms: Vec<Room> = self
            .get_rows(self.rest_url(&format!("rooms?select=*&id=eq.{room_id}")))
            .await?;
        rooms
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("room {room_id} not found"))
    }

    async fn fetch_reservations(
        &self,
        room_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<ReservationSpan>> {
        // A reservation intersects the window when it starts before the end
        // of it and ends after the start of it.
        let url = self.rest_url(&format!(
            "room_bookings?select=check_in_date,check_out_date,status\
             &room_id=eq.{room_id}&status=neq.cancelled\
             &check_in_date=lte.{}&check_out_date=gte.{}",
            format_day(to),
            format_day(from),
        ));
        self.get_rows(url).await
    }

    async fn fetch_my_bookings(&self, session: &AuthSession) -> anyhow::Result<Vec<Booking>> {
        let url = self.rest_url(&format!(
            "room_bookings?select=*&user_id=eq.{}&order=check_in_date.asc",
            session.user_id
        ));
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer(Some(session)))
            .send()
            .await
            .context("failed to fetch bookings")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("backend error ({status}): {body}");
        }
        resp.json().await.context("failed to parse bookings")
    }

    async fn create_booking(
        &self,
        session: &AuthSession,
        booking: &NewBooking,
    ) -> anyhow::Result<()> {
        let resp = self
            .client
            .post(self.rest_url("room_bookings"))
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(self.bearer(Some(session)))
            .json(booking)
            .send()
            .await
            .context("failed to create booking")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("booking creation failed ({status}): {body}");
        }
        Ok(())
    }

    async fn cancel_booking(
        &self,
        session: &AuthSession,
        booking_id: &str,
    ) -> anyhow::Result<()> {
        let resp = self
            .client
            .patch(self.rest_url(&format!("room_bookings?id=eq.{booking_id}")))
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer(Some(session)))
            .json(&json!({ "status": "cancelled" }))
            .send()
            .await
            .context("failed to cancel booking")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("booking cancellation failed ({status}): {body}");
        }
        Ok(())
    }
}
