pub fn products_fixture() -> &'static str {
    return r#"
[
  {
    "id": 1,
    "name": "Darjeeling Tea",
    "description": "First flush, loose leaf.",
    "price": 12.5,
    "imageUrl": "/images/darjeeling.png",
    "categoryId": 2
  },
  {
    "id": 2,
    "name": "Ceramic Teapot",
    "description": "Holds four cups.",
    "price": 30.0,
    "imageUrl": "/images/teapot.png",
    "categoryId": 3
  }
]
"#
    .trim();
}

pub fn categories_fixture() -> &'static str {
    return r#"[{"id": 2, "name": "Tea"}, {"id": 3, "name": "Teaware"}]"#;
}

pub fn cart_fixture(cart_id: i64, tea_quantity: i64) -> String {
    return format!(
        r#"
{{
  "id": {cart_id},
  "items": [
    {{
      "id": 10,
      "cartId": {cart_id},
      "productId": 1,
      "quantity": {tea_quantity},
      "product": {{
        "id": 1,
        "name": "Darjeeling Tea",
        "description": "First flush, loose leaf.",
        "price": 12.5,
        "imageUrl": "/images/darjeeling.png",
        "categoryId": 2
      }}
    }},
    {{
      "id": 11,
      "cartId": {cart_id},
      "productId": 2,
      "quantity": 1,
      "product": {{
        "id": 2,
        "name": "Ceramic Teapot",
        "description": "Holds four cups.",
        "price": 30.0,
        "imageUrl": "/images/teapot.png",
        "categoryId": 3
      }}
    }}
  ]
}}
"#
    )
    .trim()
    .to_string();
}

pub fn empty_cart_fixture(cart_id: i64) -> String {
    return format!(r#"{{"id": {cart_id}, "items": null}}"#);
}

pub fn orders_fixture() -> &'static str {
    return r#"
[
  {
    "id": 7,
    "userId": 3,
    "createdAt": "2024-03-05T10:30:00Z",
    "items": [
      {"id": 1, "orderId": 7, "productId": 1, "quantity": 2, "price": 12.5},
      {"id": 2, "orderId": 7, "productId": 2, "quantity": 1, "price": 30.0}
    ]
  },
  {
    "id": 4,
    "userId": 3,
    "createdAt": "2024-02-01T08:00:00Z",
    "items": null
  }
]
"#
    .trim();
}

pub fn reviews_fixture() -> &'static str {
    return r#"
[
  {
    "id": 1,
    "productId": 1,
    "userId": 3,
    "rating": 4,
    "comment": "Bright and floral.",
    "createdAt": "2024-03-06T09:00:00Z"
  }
]
"#
    .trim();
}
