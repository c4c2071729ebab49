//! Host identity helpers used in notification text.

/// Primary local IPv4 address, resolved by asking the kernel which
/// interface would route to a public address. No packet is sent; the UDP
/// connect only selects the outbound interface.
pub fn local_ip() -> String {
    fn resolve() -> std::io::Result<String> {
        let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip().to_string())
    }
    resolve().unwrap_or_else(|_| "unknown".to_string())
}

pub fn hostname() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string())
}
