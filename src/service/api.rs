use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::{ApiError, ApiResult};
use crate::http::{HttpTransport, Method, ReqwestTransport, build_request, perform_request};
use crate::model::{
    Asset, AuthResponse, BuyRoute, BuyRouteDto, Country, Credentials, Fiat, NewUser,
    PaymentRoutes, PaymentRoutesDto, RouteFilter, SellRoute, SellRouteDto, User, UserDto,
    from_active_payment_routes_dto, from_buy_route_dto, from_payment_routes_dto,
    from_sell_route_dto, from_user_dto, is_active_route, to_buy_route_dto, to_new_user_dto,
    to_sell_route_dto, to_user_dto,
};
use crate::session::{Session, SessionProvider, SessionStore};

const AUTH_URL: &str = "auth";
const USER_URL: &str = "user";
const BUY_URL: &str = "fiat2crypto";
const SELL_URL: &str = "crypto2fiat";
const ROUTE_URL: &str = "registration";
const ASSET_URL: &str = "asset";
const FIAT_URL: &str = "fiat";
const COUNTRY_URL: &str = "country";

/// Catalog of the API operations.
///
/// Authenticated operations take the [`SessionProvider`] to use for that
/// call. When it yields no session the operation fails before anything is
/// sent.
pub struct ApiService<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    route_filter: RouteFilter,
}

impl<T: HttpTransport> ApiService<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            transport,
            base_url,
            route_filter: is_active_route,
        }
    }

    /// Replaces the predicate used by [`ApiService::get_active_routes`].
    pub fn with_route_filter(mut self, filter: RouteFilter) -> Self {
        self.route_filter = filter;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch<R, B>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<&B>,
    ) -> ApiResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        let request = build_request(method, session, body)?;
        perform_request(&self.transport, &url, &request).await
    }

    async fn get<R>(&self, path: &str, session: Option<&Session>) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        self.fetch(Method::Get, path, session, None::<&()>).await
    }

    // Auth

    #[instrument(skip(self, credentials), fields(address = %credentials.address), err)]
    pub async fn sign_in(&self, credentials: &Credentials) -> ApiResult<String> {
        let path = format!("{AUTH_URL}/signIn");
        let response: AuthResponse = self
            .fetch(Method::Post, &path, None, Some(credentials))
            .await?;

        tracing::info!("Signed in");
        Ok(response.access_token)
    }

    #[instrument(skip(self, user), fields(address = %user.address), err)]
    pub async fn sign_up(&self, user: &NewUser) -> ApiResult<String> {
        let path = format!("{AUTH_URL}/signUp");
        let response: AuthResponse = self
            .fetch(Method::Post, &path, None, Some(&to_new_user_dto(user)))
            .await?;

        tracing::info!("Signed up");
        Ok(response.access_token)
    }

    /// Signs in and keeps the resulting session in `store`.
    pub async fn log_in(
        &self,
        credentials: &Credentials,
        store: &SessionStore,
    ) -> ApiResult<Session> {
        let access_token = self.sign_in(credentials).await?;
        let session = Session::new(access_token, credentials.address.clone());
        store.set(session.clone()).await;
        Ok(session)
    }

    // User

    #[instrument(skip_all, err)]
    pub async fn get_user(&self, sessions: &dyn SessionProvider) -> ApiResult<User> {
        let session = sessions.session().await?;
        let dto: UserDto = self.get(USER_URL, Some(&session)).await?;
        Ok(from_user_dto(dto))
    }

    /// Updates the profile of the session's account.
    #[instrument(skip_all, err)]
    pub async fn put_user(&self, sessions: &dyn SessionProvider, user: &User) -> ApiResult<User> {
        let session = sessions.session().await?;
        let path = format!("{USER_URL}/{}", session.address);
        let dto: UserDto = self
            .fetch(Method::Put, &path, Some(&session), Some(&to_user_dto(user)))
            .await?;
        Ok(from_user_dto(dto))
    }

    // Payment routes

    #[instrument(skip_all, err)]
    pub async fn get_routes(&self, sessions: &dyn SessionProvider) -> ApiResult<PaymentRoutes> {
        let dto = self.get_routes_dto(sessions).await?;
        Ok(from_payment_routes_dto(dto))
    }

    /// Same endpoint as [`ApiService::get_routes`], filtered client-side.
    #[instrument(skip_all, err)]
    pub async fn get_active_routes(
        &self,
        sessions: &dyn SessionProvider,
    ) -> ApiResult<PaymentRoutes> {
        let dto = self.get_routes_dto(sessions).await?;
        Ok(from_active_payment_routes_dto(dto, self.route_filter))
    }

    async fn get_routes_dto(&self, sessions: &dyn SessionProvider) -> ApiResult<PaymentRoutesDto> {
        let session = sessions.session().await?;
        self.get(ROUTE_URL, Some(&session)).await
    }

    #[instrument(skip_all, err)]
    pub async fn post_buy_route(
        &self,
        sessions: &dyn SessionProvider,
        route: &BuyRoute,
    ) -> ApiResult<BuyRoute> {
        let session = sessions.session().await?;
        let dto: BuyRouteDto = self
            .fetch(Method::Post, BUY_URL, Some(&session), Some(&to_buy_route_dto(route)))
            .await?;
        Ok(from_buy_route_dto(dto))
    }

    #[instrument(skip_all, fields(route_id = ?route.id), err)]
    pub async fn put_buy_route(
        &self,
        sessions: &dyn SessionProvider,
        route: &BuyRoute,
    ) -> ApiResult<BuyRoute> {
        let id = route.id.ok_or(ApiError::MissingRouteId("buy"))?;
        let session = sessions.session().await?;
        let path = format!("{BUY_URL}/{id}");
        let dto: BuyRouteDto = self
            .fetch(Method::Put, &path, Some(&session), Some(&to_buy_route_dto(route)))
            .await?;
        Ok(from_buy_route_dto(dto))
    }

    #[instrument(skip_all, err)]
    pub async fn post_sell_route(
        &self,
        sessions: &dyn SessionProvider,
        route: &SellRoute,
    ) -> ApiResult<SellRoute> {
        let session = sessions.session().await?;
        let dto: SellRouteDto = self
            .fetch(Method::Post, SELL_URL, Some(&session), Some(&to_sell_route_dto(route)))
            .await?;
        Ok(from_sell_route_dto(dto))
    }

    #[instrument(skip_all, fields(route_id = ?route.id), err)]
    pub async fn put_sell_route(
        &self,
        sessions: &dyn SessionProvider,
        route: &SellRoute,
    ) -> ApiResult<SellRoute> {
        let id = route.id.ok_or(ApiError::MissingRouteId("sell"))?;
        let session = sessions.session().await?;
        let path = format!("{SELL_URL}/{id}");
        let dto: SellRouteDto = self
            .fetch(Method::Put, &path, Some(&session), Some(&to_sell_route_dto(route)))
            .await?;
        Ok(from_sell_route_dto(dto))
    }

    // Master data

    #[instrument(skip(self), err)]
    pub async fn get_assets(&self) -> ApiResult<Vec<Asset>> {
        self.get(ASSET_URL, None).await
    }

    #[instrument(skip(self), err)]
    pub async fn get_fiats(&self) -> ApiResult<Vec<Fiat>> {
        self.get(FIAT_URL, None).await
    }

    #[instrument(skip(self), err)]
    pub async fn get_countries(&self) -> ApiResult<Vec<Country>> {
        self.get(COUNTRY_URL, None).await
    }
}
