use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{
            HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        Method,
    },
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Fixed cross-origin policy applied to every response.
///
/// Preflight (`OPTIONS`) requests are answered with an empty 200 before
/// routing, whatever the path.
#[derive(Clone)]
pub struct StaticCors {
    allow_origin: HeaderValue,
}

impl StaticCors {
    pub fn new(origin: &'static str) -> Self {
        Self {
            allow_origin: HeaderValue::from_static(origin),
        }
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

impl<S, B> Transform<S, ServiceRequest> for StaticCors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type InitError = ();
    type Transform = StaticCorsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StaticCorsService {
            service,
            policy: Rc::new(self.clone()),
        }))
    }
}

pub struct StaticCorsService<S> {
    service: S,
    policy: Rc<StaticCors>,
}

impl<S, B> Service<ServiceRequest> for StaticCorsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let policy = Rc::clone(&self.policy);

        if req.method() == Method::OPTIONS {
            let (req, _pl) = req.into_parts();
            let mut res = HttpResponse::Ok().finish();
            policy.apply(res.headers_mut());
            return Box::pin(async move {
                Ok(ServiceResponse::new(req, res).map_into_right_body())
            });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            policy.apply(res.headers_mut());
            Ok(res.map_into_left_body())
        })
    }
}
