//! App Router

use salvo::Router;

use crate::{categories, deposits, healthcheck, methods, sub_categories, sync};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("sync/product/{provider}").get(sync::run::handler))
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("{category}").get(categories::get::handler)),
        )
        .push(
            Router::with_path("sub-categories")
                .get(sub_categories::index::handler)
                .post(sub_categories::create::handler)
                .push(
                    Router::with_path("{sub_category}")
                        .get(sub_categories::get::handler)
                        .patch(sub_categories::update::handler)
                        .delete(sub_categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("methods")
                .get(methods::index::handler)
                .post(methods::create::handler)
                .push(
                    Router::with_path("{code}")
                        .get(methods::get::handler)
                        .patch(methods::update::handler)
                        .delete(methods::delete::handler),
                ),
        )
        .push(
            Router::with_path("deposits")
                .get(deposits::index::handler)
                .post(deposits::create::handler),
        )
}
