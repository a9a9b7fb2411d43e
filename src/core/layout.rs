//! 页面公共布局

use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }
nav { margin-bottom: 1.5rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
.errorlist { color: #b00; margin: .2rem 0; padding-left: 1rem; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: bold; }
aside { float: right; width: 14rem; margin-left: 1rem; }
";

/// 所有页面共用的外壳：标题、样式和返回列表的导航
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (STYLE) }
            }
            body {
                nav {
                    a href="/" { "All products" }
                    " | "
                    a href="/create" { "Add product" }
                }
                main { (body) }
            }
        }
    }
}

pub fn not_found_page(message: &str) -> Markup {
    page(
        "Not found",
        html! {
            h1 { "Not found" }
            p { (message) }
        },
    )
}

/// 请求无法解析时的错误页
pub fn bad_request_page(message: &str) -> Markup {
    page(
        "Bad request",
        html! {
            h1 { "Bad request" }
            p { (message) }
        },
    )
}

/// 存储失败时的通用错误页，不暴露内部细节
pub fn error_page() -> Markup {
    page(
        "Server error",
        html! {
            h1 { "Something went wrong" }
            p { "The request could not be completed. Please try again later." }
        },
    )
}
