//! 资源服务：每个后端资源一个薄封装，逐端点对应一个函数。
//! 纯透传——不缓存、不重试、没有本地状态。

pub mod packages;
pub mod roles;
pub mod users;
