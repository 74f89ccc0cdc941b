//! Shared test fixtures for the Oriflame SDK integration tests.
//!
//! Provides sample concept documents and `client_for()` which points a
//! client at a local `mockito` server.

#![allow(dead_code)]

use oriflame_sdk::{MarkupPolicy, OriflameClient};

pub const CONCEPT_PATH: &str = "/system/ajax/pdp/concept";

/// Minimal document from the upstream's documented example.
pub fn example_cream() -> serde_json::Value {
    serde_json::json!({
        "code": "1276",
        "name": "Example Cream",
        "rating": 4.5,
        "totalReviews": 120,
        "products": [{
            "code": "1276-01",
            "size": "50ml",
            "currentPrice": "$19.99",
            "currentPriceValue": 19.99,
            "isAvailable": true
        }]
    })
}

/// A fuller document with nulls, loosely-typed fields and unknown keys.
pub fn full_concept() -> serde_json::Value {
    serde_json::json!({
        "code": "38519",
        "name": "Love Nature Face Wash",
        "brandName": "Love Nature",
        "brandUrl": "/brand/love-nature",
        "rating": 4.2,
        "totalReviews": 87,
        "isRatingEnabled": true,
        "showSubscribeButton": false,
        "description": "Gentle daily cleanser.",
        "isMultiProduct": true,
        "trackingId": "unused-by-the-sdk",
        "products": [
            {
                "code": "38519",
                "shadeName": null,
                "size": "150 ml",
                "currentPrice": "Rp 89.900",
                "currentPriceValue": 89900.0,
                "oldPrice": "Rp 129.900",
                "businessPoints": 12,
                "images": [{
                    "sizes": [
                        {"url": "https://media.example/38519-s.png", "width": 200},
                        {"url": "https://media.example/38519-l.png", "width": 1200},
                        {"url": "https://media.example/38519-m.png", "width": 600}
                    ]
                }],
                "videoUrl": null,
                "labelText": "NEW",
                "labelCssClass": "label-new",
                "dealLabelText": null,
                "dealLabelCssClass": null,
                "hasReplacements": false,
                "colorHexCodes": [],
                "colorImageUrl": "",
                "isOutOfStock": false,
                "isAvailable": true,
                "canBeAddedToBasket": true,
                "canBeReserved": false,
                "productInfo": "Suitable for all skin types.",
                "benefits": ["Cleanses", "Refreshes"],
                "ingredients": [{
                    "name": "Organic Tea Tree",
                    "ingredientUrl": "/ingredients/tea-tree",
                    "image": {"sizes": [{"url": "https://media.example/tea.png", "width": 100}]},
                    "benefitSummary": "Purifying"
                }],
                "sample": null,
                "fullProductUrls": [{"url": "/p/38519"}],
                "relatedSet": {"code": "SET1"},
                "olapicTags": "face,wash",
                "barcode": "8991234567890",
                "showNotifyMeSubscription": false,
                "nextAvailableDateText": "",
                "nextAvailableDateTooltipText": ""
            },
            {
                "code": "38520",
                "shadeName": "Mint",
                "size": "50 ml",
                "currentPrice": "Rp 49.900",
                "currentPriceValue": 49900,
                "oldPrice": null,
                "businessPoints": "7.5",
                "images": null,
                "isOutOfStock": true,
                "isAvailable": false,
                "benefits": null,
                "ingredients": null
            }
        ],
        "howToUse": {"label": "How to use", "text": "Massage onto wet skin."},
        "about": {"label": "About", "text": null},
        "ingredients": {
            "mainDescription": {"label": "Ingredients", "text": "Aqua, Glycerin"},
            "displayWithAdditionalDescription": true,
            "additionalDescription": null
        },
        "additionalInformation": null
    })
}

/// Build a client that talks to `server`.
pub fn client_for(server: &mockito::Server, markup: MarkupPolicy) -> OriflameClient {
    OriflameClient::builder()
        .base_url(server.url())
        .markup(markup)
        .build()
        .unwrap()
}
