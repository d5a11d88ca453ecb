//! HTTP API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /savefood | POST | 创建菜品 |
//! | /getfood | GET | 获取全部菜品 |
//! | /food/{id} | GET / PUT / DELETE | 单个菜品 查询 / 全量替换 / 删除 |
//! | /health | GET | 健康检查 |

pub mod extract;
pub mod food;
pub mod health;
