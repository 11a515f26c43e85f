//! Bilingual display strings. Static elements carry a `data-i18n` attribute
//! resolved against these tables; dynamic renders look strings up directly.
//! Templates use positional `{0}`/`{1}` placeholders filled by [`fill`].

use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Unknown or missing tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh" => Language::Zh,
            _ => Language::En,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

lazy_static! {
    static ref EN: HashMap<&'static str, &'static str> = [
        ("title", "API Configuration Manager"),
        ("subtitle", "Web Interface - Manage and Switch API Provider Configurations"),
        ("languageSwitch", "CN"),
        ("loading", "Loading..."),
        ("currentStatus", "🔍 Current Configuration Status"),
        ("clearConfig", "Clear Configuration"),
        ("refreshStatus", "Refresh Status"),
        ("statusBaseUrl", "Base URL:"),
        ("statusMainModel", "Main Model:"),
        ("statusFastModel", "Fast Model:"),
        ("statusCurrentProvider", "Current Provider:"),
        ("noConfigured", "🚫 No API provider currently configured"),
        ("pleaseSelect", "Please select a model to configure"),
        ("notSetValue", "Not set"),
        ("unknownProvider", "Unknown"),
        ("modelManagement", "🔧 Model Configuration Management"),
        ("searchPlaceholder", "Search models..."),
        ("addNewModel", "➕ Add New Model"),
        ("addModelTitle", "Add New Model Configuration"),
        ("editModelTitle", "Edit Model Configuration"),
        ("modelIdLabel", "Model ID *"),
        ("modelIdPlaceholder", "e.g. claude3"),
        ("displayNameLabel", "Display Name *"),
        ("displayNamePlaceholder", "e.g. Claude 3"),
        ("descriptionLabel", "Description"),
        ("descriptionPlaceholder", "Model description"),
        ("baseUrlLabel", "API Base URL *"),
        ("baseUrlPlaceholder", "e.g. https://api.example.com/anthropic"),
        ("apiKeyEnvLabel", "API Key Environment Variable *"),
        ("apiKeyEnvPlaceholder", "e.g. CLAUDE_API_KEY"),
        ("mainModelLabel", "Main Model Name *"),
        ("mainModelPlaceholder", "e.g. claude-3-opus"),
        ("fastModelLabel", "Fast Model Name"),
        ("fastModelPlaceholder", "e.g. claude-3-haiku (leave empty to use main model)"),
        ("save", "Save"),
        ("cancel", "Cancel"),
        ("edit", "Edit"),
        ("switchToModel", "Switch to this model"),
        ("delete", "Delete"),
        ("description", "Description:"),
        ("api", "API:"),
        ("environmentVar", "Environment Variable:"),
        ("models", "Models:"),
        ("noModels", "No model configurations found"),
        ("noDescription", "No description"),
        ("deleteConfirm", "Are you sure you want to delete model \"{0}\" ({1})? This operation cannot be undone."),
        ("clearConfirm", "Are you sure you want to clear the current API configuration?"),
        ("requiredFields", "Please fill in all required fields"),
        ("invalidModelId", "Model ID can only contain letters, numbers, underscores and hyphens"),
        ("switchSuccess", "Switched to model: {0}"),
        ("addSuccess", "Added model: {0}"),
        ("updateSuccess", "Updated model: {0}"),
        ("deleteSuccess", "Deleted model: {0}"),
        ("clearSuccess", "Configuration cleared"),
        ("refreshSuccess", "Status refreshed"),
        ("statusLoadError", "Unable to load current status - please ensure the backend service is running"),
        ("modelsLoadError", "Unable to load model configurations - please ensure the backend service is running"),
        ("keysLoadError", "Unable to load API keys - please ensure the backend service is running"),
        ("keyManagement", "🔑 API Key Management"),
        ("envVarPlaceholder", "e.g. DEEPSEEK_API_KEY"),
        ("keyValuePlaceholder", "Enter API key value"),
        ("addKey", "Add Key"),
        ("setKey", "Save Key"),
        ("fromConfigBadge", "from config"),
        ("keySet", "Key set"),
        ("keyNotSet", "No key stored"),
        ("noKeys", "No API keys found"),
        ("keyDeleteConfirm", "Are you sure you want to delete the key for \"{0}\"?"),
        ("keySavedSuccess", "Key saved for {0}"),
        ("keyDeletedSuccess", "Key removed for {0}"),
        ("keyActionFailed", "Key operation failed"),
        ("emptyKeyValue", "Please enter a key value"),
        ("testSection", "🧪 Model Connectivity Test"),
        ("testPromptPlaceholder", "Enter a prompt to send to the active model..."),
        ("runTest", "Run Test"),
        ("testing", "Testing, please wait..."),
        ("testFailed", "Test failed:"),
        ("testModelLabel", "Model:"),
        ("testBaseUrlLabel", "Base URL:"),
        ("testResponseLabel", "Response:"),
        ("noModelConfigured", "No model configured - switch to a model first"),
        ("emptyPrompt", "Please enter a test prompt"),
    ]
    .iter()
    .cloned()
    .collect();
    static ref ZH: HashMap<&'static str, &'static str> = [
        ("title", "API 配置管理器"),
        ("subtitle", "Web界面 - 管理和切换API提供商配置"),
        ("languageSwitch", "EN"),
        ("loading", "加载中..."),
        ("currentStatus", "🔍 当前配置状态"),
        ("clearConfig", "清除配置"),
        ("refreshStatus", "刷新状态"),
        ("statusBaseUrl", "基础URL："),
        ("statusMainModel", "主模型："),
        ("statusFastModel", "快速模型："),
        ("statusCurrentProvider", "当前提供商："),
        ("noConfigured", "🚫 当前未配置API提供商"),
        ("pleaseSelect", "请选择模型进行配置"),
        ("notSetValue", "未设置"),
        ("unknownProvider", "未知"),
        ("modelManagement", "🔧 模型配置管理"),
        ("searchPlaceholder", "搜索模型..."),
        ("addNewModel", "➕ 添加新模型"),
        ("addModelTitle", "添加新模型配置"),
        ("editModelTitle", "编辑模型配置"),
        ("modelIdLabel", "模型ID *"),
        ("modelIdPlaceholder", "例如：claude3"),
        ("displayNameLabel", "显示名称 *"),
        ("displayNamePlaceholder", "例如：Claude 3"),
        ("descriptionLabel", "描述"),
        ("descriptionPlaceholder", "模型描述"),
        ("baseUrlLabel", "API基础URL *"),
        ("baseUrlPlaceholder", "例如：https://api.example.com/anthropic"),
        ("apiKeyEnvLabel", "API密钥环境变量 *"),
        ("apiKeyEnvPlaceholder", "例如：CLAUDE_API_KEY"),
        ("mainModelLabel", "主模型名称 *"),
        ("mainModelPlaceholder", "例如：claude-3-opus"),
        ("fastModelLabel", "快速模型名称"),
        ("fastModelPlaceholder", "例如：claude-3-haiku（留空使用主模型）"),
        ("save", "保存"),
        ("cancel", "取消"),
        ("edit", "编辑"),
        ("switchToModel", "切换到此模型"),
        ("delete", "删除"),
        ("description", "描述："),
        ("api", "API："),
        ("environmentVar", "环境变量："),
        ("models", "模型："),
        ("noModels", "未找到模型配置"),
        ("noDescription", "暂无描述"),
        ("deleteConfirm", "确定要删除模型\"{0}\"（{1}）吗？此操作无法撤销。"),
        ("clearConfirm", "确定要清除当前API配置吗？"),
        ("requiredFields", "请填写所有必填字段"),
        ("invalidModelId", "模型ID只能包含字母、数字、下划线和连字符"),
        ("switchSuccess", "已切换到模型：{0}"),
        ("addSuccess", "已添加模型：{0}"),
        ("updateSuccess", "已更新模型：{0}"),
        ("deleteSuccess", "已删除模型：{0}"),
        ("clearSuccess", "配置已清除"),
        ("refreshSuccess", "状态已刷新"),
        ("statusLoadError", "无法加载当前状态 - 请确保后端服务正在运行"),
        ("modelsLoadError", "无法加载模型配置 - 请确保后端服务正在运行"),
        ("keysLoadError", "无法加载API密钥 - 请确保后端服务正在运行"),
        ("keyManagement", "🔑 API密钥管理"),
        ("envVarPlaceholder", "例如：DEEPSEEK_API_KEY"),
        ("keyValuePlaceholder", "输入API密钥值"),
        ("addKey", "添加密钥"),
        ("setKey", "保存密钥"),
        ("fromConfigBadge", "来自配置"),
        ("keySet", "已设置"),
        ("keyNotSet", "未存储密钥"),
        ("noKeys", "未找到API密钥"),
        ("keyDeleteConfirm", "确定要删除\"{0}\"的密钥吗？"),
        ("keySavedSuccess", "已保存{0}的密钥"),
        ("keyDeletedSuccess", "已删除{0}的密钥"),
        ("keyActionFailed", "密钥操作失败"),
        ("emptyKeyValue", "请输入密钥值"),
        ("testSection", "🧪 模型连接测试"),
        ("testPromptPlaceholder", "输入要发送给当前模型的提示词..."),
        ("runTest", "运行测试"),
        ("testing", "测试中，请稍候..."),
        ("testFailed", "测试失败："),
        ("testModelLabel", "模型："),
        ("testBaseUrlLabel", "基础URL："),
        ("testResponseLabel", "响应："),
        ("noModelConfigured", "未配置模型 - 请先切换到某个模型"),
        ("emptyPrompt", "请输入测试提示词"),
    ]
    .iter()
    .cloned()
    .collect();
}

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Look a key up in the given language, falling back to English.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language).get(key).or_else(|| EN.get(key)).copied()
}

/// Translate a literal key; an unknown key renders as itself so a missing
/// entry is visible instead of blank.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    lookup(language, key).unwrap_or(key)
}

/// Substitute positional `{0}`, `{1}`, ... placeholders. Placeholders with
/// no matching argument are left intact.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", index), arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip_defaults_to_english() {
        assert_eq!(Language::from_tag("zh"), Language::Zh);
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag(Language::Zh.as_str()), Language::Zh);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Language::En.toggled(), Language::Zh);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn lookup_falls_back_to_english_then_key() {
        assert_eq!(tr(Language::Zh, "save"), "保存");
        assert_eq!(tr(Language::En, "save"), "Save");
        assert_eq!(tr(Language::Zh, "definitely-not-a-key"), "definitely-not-a-key");
    }

    #[test]
    fn fill_substitutes_positionally() {
        assert_eq!(fill("a {0} b {1}", &["x", "y"]), "a x b y");
        assert_eq!(
            fill(tr(Language::En, "deleteConfirm"), &["Claude 3", "claude3"]),
            "Are you sure you want to delete model \"Claude 3\" (claude3)? This operation cannot be undone."
        );
    }

    #[test]
    fn fill_leaves_unmatched_placeholders() {
        assert_eq!(fill("{0} and {1}", &["only"]), "only and {1}");
    }

    #[test]
    fn confirmation_templates_exist_in_both_languages() {
        for key in ["deleteConfirm", "clearConfirm", "keyDeleteConfirm"] {
            assert!(EN.get(key).is_some(), "en missing {key}");
            assert!(ZH.get(key).is_some(), "zh missing {key}");
        }
    }
}
