//! Employee API Module
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 全部员工 |
//! | / | POST | 创建员工 (201) |
//! | /search/{name} | GET | 按姓名模糊搜索 |
//! | /highestSalary | GET | 最高薪资 |
//! | /topTenHighestEarningEmployeeNames | GET | 薪资前十名姓名 |
//! | /{id} | GET | 按 ID 查询 |
//! | /{id} | DELETE | 按 ID 删除 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search/{name}", get(handler::search))
        .route("/highestSalary", get(handler::highest_salary))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(handler::top_ten_names),
        )
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
