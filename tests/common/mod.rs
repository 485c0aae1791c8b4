//! Shared fixtures: recorded-shape Bbox payloads and a mock device API.

#![allow(dead_code)]

use bbox_exporter::bbox::resources::*;
use bbox_exporter::bbox::{BboxClient, Endpoint, Snapshot, WirelessBand};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PASSWORD: &str = "s3cret";
pub const SESSION_COOKIE: &str = "BBOX_ID=0123456789abcdef";

pub fn password() -> secrecy::SecretString {
    secrecy::SecretString::new(PASSWORD.into())
}

pub fn device() -> Value {
    json!([{
        "device": {
            "now": "2026-10-16T10:00:00+0200",
            "status": 1,
            "numberofboots": "12",
            "modelname": "F@st5330b",
            "temperature": { "current": "51", "status": "OK" },
            "using": { "ipv4": 1, "ipv6": 1, "ftth": 1, "adsl": 0, "vdsl": 0 }
        }
    }])
}

pub fn device_cpu() -> Value {
    json!([{
        "device": {
            "cpu": {
                "time": {
                    "total": 100000, "user": "20000", "nice": 0, "system": 10000,
                    "io": 100, "idle": 69000, "irq": "900"
                },
                "process": { "created": 5000, "running": 2, "blocked": 0 }
            }
        }
    }])
}

pub fn device_mem() -> Value {
    json!([{
        "device": { "mem": { "total": "512000", "free": 100000, "cached": 50000 } }
    }])
}

pub fn services() -> Value {
    json!([{
        "services": {
            "now": "2026-10-16T10:00:00+0200",
            "firewall": { "status": 1, "enable": 1 },
            "dyndns": { "state": 0, "enable": 0, "nbrules": 2 },
            "dhcp": { "status": 1, "enable": 1 },
            "nat": { "status": 1, "enable": 1, "nbrules": 4 },
            "gamermode": { "status": 0, "enable": 0 },
            "upnp": { "igd": { "status": 1, "enable": 1, "nbrules": 3 } },
            "remote": {
                "proxywol": { "status": 0, "enable": 0 },
                "admin": { "status": 0, "enable": 0 }
            },
            "parentalcontrol": { "enable": 0 },
            "wifischeduler": { "enable": 0 },
            "voipscheduler": { "enable": 0 },
            "notification": { "enable": 1 },
            "hotspot": { "status": 1, "enable": 1 },
            "usb": {
                "samba": { "status": 1, "enable": 1 },
                "printer": { "status": 0, "enable": 0 },
                "dlna": { "status": 1, "enable": "1" }
            }
        }
    }])
}

fn traffic(rx_bytes: Value, tx_bytes: Value) -> Value {
    json!({
        "rx": {
            "packets": 1000, "bytes": rx_bytes, "packetserrors": 0, "packetsdiscards": 1,
            "occupation": 12, "bandwidth": "300", "maxBandwidth": 1000000
        },
        "tx": {
            "packets": "900", "bytes": tx_bytes, "packetserrors": 2, "packetsdiscards": 0,
            "occupation": 3, "bandwidth": 100, "maxBandwidth": "600000"
        }
    })
}

pub fn wan_ip() -> Value {
    json!([{
        "wan": {
            "internet": { "state": 2 },
            "interface": { "id": 1, "default": 1, "state": 2 },
            "ip": {
                "address": "203.0.113.7", "state": "Up", "gateway": "203.0.113.1",
                "dnsservers": "203.0.113.53", "subnet": "255.255.255.0",
                "ip6state": "Up",
                "ip6address": [{ "ipaddress": "2001:db8::1", "status": "Valid" }],
                "ip6prefix": [{ "prefix": "2001:db8::/56", "status": "Valid" }],
                "mac": "00:11:22:33:44:55", "mtu": 1500
            },
            "link": { "state": "Up", "type": "FTTH" }
        }
    }])
}

pub fn wan_ip_stats() -> Value {
    json!([{ "wan": { "ip": { "stats": traffic(json!("2000000"), json!(1000000)) } } }])
}

pub fn wan_ftth_stats() -> Value {
    json!([{ "wan": { "ftth": { "mode": "GPON", "state": "Up" } } }])
}

pub fn wan_diags() -> Value {
    json!([{
        "diags": {
            "dns": [
                { "host": "a", "min": -1, "max": -1, "average": -1, "success": 0, "error": 0, "tries": 0 },
                { "host": "b", "min": 1, "max": 5, "average": 3, "success": 3, "error": 0, "tries": 3 }
            ],
            "ping": [
                { "host": "c", "min": 0, "max": 0, "average": 0, "success": 0, "error": 0, "tries": 0 }
            ],
            "http": [
                { "host": "d", "min": "10", "max": "30", "average": "20", "success": 1, "error": 0, "tries": 1 }
            ]
        }
    }])
}

pub fn lan_ip() -> Value {
    json!([{
        "lan": {
            "ip": {
                "state": "Up", "mtu": 1500, "ipaddress": "192.168.1.254",
                "ip6enable": 1, "ip6state": "Up", "ip6address": [], "ip6prefix": [],
                "netmask": "255.255.255.0", "mac": "00:11:22:33:44:56",
                "hostname": "bbox", "domain": "home"
            },
            "switch": {
                "ports": [
                    { "id": 1, "state": "Up", "link_mode": "1000Full", "blocked": 0, "flickering": 0 },
                    { "id": 2, "state": "Down", "link_mode": "", "blocked": 0, "flickering": 0 }
                ]
            }
        }
    }])
}

pub fn lan_stats() -> Value {
    json!([{ "lan": { "stats": traffic(json!(5000), json!("7000")) } }])
}

pub fn hosts() -> Value {
    json!([{
        "hosts": {
            "list": [
                { "id": 1, "hostname": "phone", "active": 1, "link": "wifi" },
                { "id": 2, "hostname": "nas", "active": 0, "link": "ethernet" },
                { "id": 3, "hostname": "laptop", "active": 1, "link": "wifi" }
            ]
        }
    }])
}

pub fn wireless_stats(band: &str) -> Value {
    json!([{ "wireless": { "ssid": { "id": band, "stats": traffic(json!(300), json!(400)) } } }])
}

pub fn dns_stats() -> Value {
    json!([{ "dns": { "nbqueries": 42, "min": 1, "max": "50", "avg": 7 } }])
}

pub fn iptv() -> Value {
    json!([{
        "iptv": [
            { "address": "232.0.0.1", "ipaddress": "192.168.1.10", "name": "TF1", "number": 1, "receipt": 1, "epgid": 192 },
            { "address": "232.0.0.2", "ipaddress": "192.168.1.10", "name": "France 2", "number": 2, "receipt": 0, "epgid": 4 }
        ],
        "now": "2026-10-16T10:00:00+0200"
    }])
}

/// Every GET resource, in fetch order, for the default bands
pub fn resource_fixtures() -> Vec<(&'static str, Value)> {
    vec![
        ("/device", device()),
        ("/device/cpu", device_cpu()),
        ("/device/mem", device_mem()),
        ("/services", services()),
        ("/wan/ip", wan_ip()),
        ("/wan/ip/stats", wan_ip_stats()),
        ("/wan/ftth/stats", wan_ftth_stats()),
        ("/wan/diags", wan_diags()),
        ("/lan/ip", lan_ip()),
        ("/lan/stats", lan_stats()),
        ("/hosts", hosts()),
        ("/wireless/24/stats", wireless_stats("24")),
        ("/wireless/5/stats", wireless_stats("5")),
        ("/dns/stats", dns_stats()),
        ("/iptv", iptv()),
    ]
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Vec<T> {
    serde_json::from_value(value).expect("fixture should decode")
}

/// The snapshot a successful cycle against the fixtures would produce
pub fn snapshot() -> Snapshot {
    Snapshot {
        device: DeviceMetrics {
            informations: decode(device()),
            cpu: decode(device_cpu()),
            memory: decode(device_mem()),
        },
        services: ServicesMetrics {
            informations: decode(services()),
        },
        wan: WanMetrics {
            ip_informations: decode(wan_ip()),
            ip_statistics: decode(wan_ip_stats()),
            ftth_statistics: decode(wan_ftth_stats()),
            diagnostics: decode(wan_diags()),
        },
        lan: LanMetrics {
            ip_informations: decode(lan_ip()),
            statistics: decode(lan_stats()),
            devices: decode(hosts()),
        },
        wireless: WirelessMetrics {
            bands: vec![
                BandStatistics {
                    band: WirelessBand::Ghz24,
                    statistics: decode(wireless_stats("24")),
                },
                BandStatistics {
                    band: WirelessBand::Ghz5,
                    statistics: decode(wireless_stats("5")),
                },
            ],
        },
        dns: DnsMetrics {
            statistics: decode(dns_stats()),
        },
        iptv: IptvMetrics {
            informations: decode(iptv()),
        },
    }
}

/// Client pointed at a mock server (plain http, which `Endpoint::parse` would refuse)
pub fn client_for(server: &MockServer) -> BboxClient {
    let url = Url::parse(&server.uri()).expect("mock server uri");
    BboxClient::new(Endpoint::new_unchecked(url), true).expect("client")
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("Set-Cookie", format!("{}; Path=/", SESSION_COOKIE)),
        )
        .mount(server)
        .await;
}

pub async fn mount_resource(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1{}", resource)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Login plus every resource
pub async fn mount_bbox(server: &MockServer) {
    mount_login(server).await;
    for (resource, body) in resource_fixtures() {
        mount_resource(server, resource, body).await;
    }
}
