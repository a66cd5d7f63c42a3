/*!
 * 请求追踪中间件
 *
 * 为每个请求记录方法、路径、状态码与耗时。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::App;
 * use crate::middlewares::RequestTrace;
 *
 * App::new().wrap(RequestTrace);
 * ```
 *
 * ## 日志级别
 *
 * - 2xx/3xx: `info`
 * - 4xx: `warn`
 * - 5xx 或处理出错: `error`
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_service::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let result = service.call(req).await;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(res) => {
                    let status = res.status();
                    if status.is_server_error() {
                        error!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    } else if status.is_client_error() {
                        warn!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    } else {
                        info!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    }
                }
                Err(e) => {
                    error!("{} {} failed: {} ({:.2} ms)", method, path, e, elapsed_ms);
                }
            }

            result
        })
    }
}
