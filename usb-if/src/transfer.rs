use num_enum::FromPrimitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
}

impl Direction {
    pub fn from_address(addr: u8) -> Self {
        if addr & 0x80 != 0 { Self::In } else { Self::Out }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RequestType {
    Standard = 0,
    Class = 1,
    Vendor = 2,
    Reserved = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Recipient {
    Device = 0,
    Interface = 1,
    Endpoint = 2,
    Other = 3,
}

/// USB 2.0 规范表 9-4 中的标准请求码；厂商请求落入 `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum Request {
    GetStatus = 0,
    ClearFeature = 1,
    SetFeature = 3,
    SetAddress = 5,
    GetDescriptor = 6,
    SetDescriptor = 7,
    GetConfiguration = 8,
    SetConfiguration = 9,
    GetInterface = 10,
    SetInterface = 11,
    SynchFrame = 12,
    #[num_enum(catch_all)]
    Other(u8),
}

impl From<Request> for u8 {
    fn from(value: Request) -> Self {
        match value {
            Request::GetStatus => 0,
            Request::ClearFeature => 1,
            Request::SetFeature => 3,
            Request::SetAddress => 5,
            Request::GetDescriptor => 6,
            Request::SetDescriptor => 7,
            Request::GetConfiguration => 8,
            Request::SetConfiguration => 9,
            Request::GetInterface => 10,
            Request::SetInterface => 11,
            Request::SynchFrame => 12,
            Request::Other(v) => v,
        }
    }
}

/// 控制传输 setup 包（不含方向与长度，由调用的接口决定）
#[derive(Debug, Clone)]
pub struct ControlSetup {
    pub request_type: RequestType,
    pub recipient: Recipient,
    pub request: Request,
    pub value: u16,
    pub index: u16,
}

impl ControlSetup {
    /// 组装 bmRequestType
    pub fn request_type_byte(&self, direction: Direction) -> u8 {
        let dir = match direction {
            Direction::Out => 0,
            Direction::In => 0x80,
        };
        dir | ((self.request_type as u8) << 5) | self.recipient as u8
    }
}
