// ============================================================================
// Lingo - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
// 边界:
//   - ✅ 翻译表、查询选项、配置的数据结构
//   - ❌ 不应包含解析和格式化逻辑
//
// ============================================================================

pub mod config;
pub mod options;
pub mod translation;
