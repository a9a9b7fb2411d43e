//! 产品页面模板

use maud::{html, Markup};

use super::form::{FormErrors, ProductForm};
use super::model::Product;
use crate::core::layout::page;

pub fn list_page(heading: &str, products: &[Product]) -> Markup {
    page(
        heading,
        html! {
            h1 { (heading) }
            @if products.is_empty() {
                p { "No products yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Name" } th { "Description" } th { "Price" } th {} }
                    }
                    tbody {
                        @for product in products {
                            tr {
                                td { a href={ "/" (product.id) "/details" } { (product.name) } }
                                td { (product.description) }
                                td { (product.price) }
                                td {
                                    a href={ "/" (product.id) "/update" } { "Edit" }
                                    " "
                                    a href={ "/" (product.id) "/delete" } { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            p { a href="/create" { "Add a product" } }
        },
    )
}

/// 详情页，侧栏附带全部产品
pub fn detail_page(product: &Product, products: &[Product]) -> Markup {
    page(
        &product.name,
        html! {
            aside {
                h2 { "Products" }
                ul {
                    @for other in products {
                        li {
                            @if other.id == product.id {
                                strong { (other.name) }
                            } @else {
                                a href={ "/" (other.id) "/details" } { (other.name) }
                            }
                        }
                    }
                }
            }
            h1 { (product.name) }
            dl {
                dt { "Description" }
                dd { (product.description) }
                dt { "Price" }
                dd { (product.price) }
            }
            p {
                a href={ "/" (product.id) "/update" } { "Edit" }
                " | "
                a href={ "/" (product.id) "/delete" } { "Delete" }
            }
        },
    )
}

pub fn create_page(form: &ProductForm, errors: &FormErrors) -> Markup {
    page(
        "Add product",
        html! {
            h1 { "Add product" }
            (product_form("/create", form, errors, "Create"))
        },
    )
}

pub fn update_page(id: i64, form: &ProductForm, errors: &FormErrors) -> Markup {
    let action = format!("/{}/update", id);
    page(
        "Edit product",
        html! {
            h1 { "Edit product" }
            (product_form(&action, form, errors, "Save"))
        },
    )
}

pub fn delete_page(product: &Product) -> Markup {
    page(
        "Delete product",
        html! {
            h1 { "Delete product" }
            p { "Are you sure you want to delete \"" (product.name) "\"?" }
            form method="post" action={ "/" (product.id) "/delete" } {
                button type="submit" { "Confirm" }
                " "
                a href="/" { "Cancel" }
            }
        },
    )
}

fn product_form(action: &str, form: &ProductForm, errors: &FormErrors, submit: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            div.field {
                label for="id_name" { "Name" }
                (field_errors(errors.get("name")))
                input id="id_name" type="text" name="name" maxlength="255" required value=(form.name);
            }
            div.field {
                label for="id_description" { "Description" }
                (field_errors(errors.get("description")))
                textarea id="id_description" name="description" rows="4" cols="40" maxlength="255" required {
                    (form.description)
                }
            }
            div.field {
                label for="id_price" { "Price" }
                (field_errors(errors.get("price")))
                input id="id_price" type="number" name="price" required value=(form.price);
            }
            button type="submit" { (submit) }
        }
    }
}

fn field_errors(messages: &[String]) -> Markup {
    html! {
        @if !messages.is_empty() {
            ul.errorlist {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}
