//! Documented value sets.
//!
//! Each set is a soft enum: the documented values are variants, and any
//! other string the service sends is kept in `Unknown`. Shape members typed
//! with these enums accept either a variant or its wire string.

use connect_define::soft_enum;

soft_enum! {
    /// How a contact reaches or leaves the contact center.
    pub enum Channel {
        Voice = "VOICE",
        Chat = "CHAT",
        Task = "TASK",
        Email = "EMAIL",
    }
}

soft_enum! {
    /// How a contact was started.
    pub enum ContactInitiationMethod {
        /// The customer called in.
        Inbound = "INBOUND",
        /// An agent placed an outbound call.
        Outbound = "OUTBOUND",
        /// An agent transferred the contact to another agent or queue.
        Transfer = "TRANSFER",
        /// The contact moved between queues.
        QueueTransfer = "QUEUE_TRANSFER",
        /// The customer asked to be called back.
        Callback = "CALLBACK",
        /// Started through a `Start*Contact` operation.
        Api = "API",
        /// Started by a disconnect flow.
        Disconnect = "DISCONNECT",
        /// A supervisor began monitoring.
        Monitor = "MONITOR",
        ExternalOutbound = "EXTERNAL_OUTBOUND",
        WebrtcApi = "WEBRTC_API",
        AgentReply = "AGENT_REPLY",
        Flow = "FLOW",
    }
}

soft_enum! {
    /// Outcome of answering machine detection on an outbound call.
    pub enum AnsweringMachineDetectionStatus {
        Answered = "ANSWERED",
        Undetected = "UNDETECTED",
        Error = "ERROR",
        HumanAnswered = "HUMAN_ANSWERED",
        SitToneDetected = "SIT_TONE_DETECTED",
        SitToneBusy = "SIT_TONE_BUSY",
        SitToneInvalidNumber = "SIT_TONE_INVALID_NUMBER",
        FaxMachineDetected = "FAX_MACHINE_DETECTED",
        VoicemailBeep = "VOICEMAIL_BEEP",
        VoicemailNoBeep = "VOICEMAIL_NO_BEEP",
        AmdUnresolved = "AMD_UNRESOLVED",
        AmdUnanswered = "AMD_UNANSWERED",
        AmdError = "AMD_ERROR",
        AmdNotApplicable = "AMD_NOT_APPLICABLE",
    }
}

soft_enum! {
    /// State of one step of a contact's routing criteria.
    pub enum RoutingCriteriaStepStatus {
        Active = "ACTIVE",
        Inactive = "INACTIVE",
        Joined = "JOINED",
        Expired = "EXPIRED",
    }
}

soft_enum! {
    /// Video capability of a participant.
    pub enum VideoCapability {
        Send = "SEND",
    }
}

soft_enum! {
    /// Screen sharing capability of a participant.
    pub enum ScreenShareCapability {
        Send = "SEND",
    }
}

soft_enum! {
    /// Kind of value a contact reference carries.
    pub enum ReferenceType {
        Url = "URL",
        Attachment = "ATTACHMENT",
        ContactAnalysis = "CONTACT_ANALYSIS",
        Number = "NUMBER",
        String = "STRING",
        Date = "DATE",
        Email = "EMAIL",
        EmailMessage = "EMAIL_MESSAGE",
    }
}

soft_enum! {
    /// Traffic class of an outbound voice contact.
    pub enum TrafficType {
        General = "GENERAL",
        Campaign = "CAMPAIGN",
    }
}

soft_enum! {
    /// How much of a past chat session a persistent chat restores.
    pub enum RehydrationType {
        EntirePastSession = "ENTIRE_PAST_SESSION",
        FromSegment = "FROM_SEGMENT",
    }
}

soft_enum! {
    pub enum MeetingFeatureStatus {
        Available = "AVAILABLE",
        Unavailable = "UNAVAILABLE",
    }
}

soft_enum! {
    /// Lifecycle state of a traffic distribution group.
    pub enum TrafficDistributionGroupStatus {
        CreationInProgress = "CREATION_IN_PROGRESS",
        Active = "ACTIVE",
        CreationFailed = "CREATION_FAILED",
        PendingDeletion = "PENDING_DELETION",
        DeletionFailed = "DELETION_FAILED",
        UpdateInProgress = "UPDATE_IN_PROGRESS",
    }
}

soft_enum! {
    /// Category of data an instance storage configuration applies to.
    pub enum InstanceStorageResourceType {
        ChatTranscripts = "CHAT_TRANSCRIPTS",
        CallRecordings = "CALL_RECORDINGS",
        ScheduledReports = "SCHEDULED_REPORTS",
        MediaStreams = "MEDIA_STREAMS",
        ContactTraceRecords = "CONTACT_TRACE_RECORDS",
        AgentEvents = "AGENT_EVENTS",
        RealTimeContactAnalysisSegments = "REAL_TIME_CONTACT_ANALYSIS_SEGMENTS",
        Attachments = "ATTACHMENTS",
        ContactEvaluations = "CONTACT_EVALUATIONS",
        ScreenRecordings = "SCREEN_RECORDINGS",
        RealTimeContactAnalysisChatSegments = "REAL_TIME_CONTACT_ANALYSIS_CHAT_SEGMENTS",
        RealTimeContactAnalysisVoiceSegments = "REAL_TIME_CONTACT_ANALYSIS_VOICE_SEGMENTS",
    }
}

soft_enum! {
    /// Storage backend of an instance storage configuration.
    pub enum StorageType {
        S3 = "S3",
        KinesisVideoStream = "KINESIS_VIDEO_STREAM",
        KinesisStream = "KINESIS_STREAM",
        KinesisFirehose = "KINESIS_FIREHOSE",
    }
}

soft_enum! {
    pub enum EncryptionType {
        Kms = "KMS",
    }
}

soft_enum! {
    /// Dimension that metric results are grouped by.
    pub enum Grouping {
        Queue = "QUEUE",
        Channel = "CHANNEL",
        RoutingProfile = "ROUTING_PROFILE",
        RoutingStepExpression = "ROUTING_STEP_EXPRESSION",
    }
}

soft_enum! {
    /// Metrics available from `GetMetricData`.
    pub enum HistoricalMetricName {
        ContactsQueued = "CONTACTS_QUEUED",
        ContactsHandled = "CONTACTS_HANDLED",
        ContactsAbandoned = "CONTACTS_ABANDONED",
        ContactsConsulted = "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst = "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming = "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound = "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons = "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn = "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut = "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue = "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue = "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed = "CONTACTS_MISSED",
        CallbackContactsHandled = "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled = "API_CONTACTS_HANDLED",
        Occupancy = "OCCUPANCY",
        HandleTime = "HANDLE_TIME",
        AfterContactWorkTime = "AFTER_CONTACT_WORK_TIME",
        QueuedTime = "QUEUED_TIME",
        AbandonTime = "ABANDON_TIME",
        QueueAnswerTime = "QUEUE_ANSWER_TIME",
        HoldTime = "HOLD_TIME",
        InteractionTime = "INTERACTION_TIME",
        InteractionAndHoldTime = "INTERACTION_AND_HOLD_TIME",
        ServiceLevel = "SERVICE_LEVEL",
    }
}

soft_enum! {
    /// Metrics available from `GetCurrentMetricData`.
    pub enum CurrentMetricName {
        AgentsOnline = "AGENTS_ONLINE",
        AgentsAvailable = "AGENTS_AVAILABLE",
        AgentsOnCall = "AGENTS_ON_CALL",
        AgentsNonProductive = "AGENTS_NON_PRODUCTIVE",
        AgentsAfterContactWork = "AGENTS_AFTER_CONTACT_WORK",
        AgentsError = "AGENTS_ERROR",
        AgentsStaffed = "AGENTS_STAFFED",
        ContactsInQueue = "CONTACTS_IN_QUEUE",
        OldestContactAge = "OLDEST_CONTACT_AGE",
        ContactsScheduled = "CONTACTS_SCHEDULED",
        AgentsOnContact = "AGENTS_ON_CONTACT",
        SlotsActive = "SLOTS_ACTIVE",
        SlotsAvailable = "SLOTS_AVAILABLE",
    }
}

soft_enum! {
    /// Metrics available from `GetMetricDataV2`.
    ///
    /// The service accepts more names than are listed here; those arrive as
    /// `Unknown` and pass through unchanged.
    pub enum MetricNameV2 {
        AgentAdherentTime = "AGENT_ADHERENT_TIME",
        AgentNonResponse = "AGENT_NON_RESPONSE",
        AgentOccupancy = "AGENT_OCCUPANCY",
        AgentScheduleAdherence = "AGENT_SCHEDULE_ADHERENCE",
        AgentScheduledTime = "AGENT_SCHEDULED_TIME",
        AvgAbandonTime = "AVG_ABANDON_TIME",
        AvgAfterContactWorkTime = "AVG_AFTER_CONTACT_WORK_TIME",
        AvgAgentConnectingTime = "AVG_AGENT_CONNECTING_TIME",
        AvgContactDuration = "AVG_CONTACT_DURATION",
        AvgConversationDuration = "AVG_CONVERSATION_DURATION",
        AvgGreetingTimeAgent = "AVG_GREETING_TIME_AGENT",
        AvgHandleTime = "AVG_HANDLE_TIME",
        AvgHoldTime = "AVG_HOLD_TIME",
        AvgHolds = "AVG_HOLDS",
        AvgInteractionAndHoldTime = "AVG_INTERACTION_AND_HOLD_TIME",
        AvgInteractionTime = "AVG_INTERACTION_TIME",
        AvgInterruptionsAgent = "AVG_INTERRUPTIONS_AGENT",
        AvgInterruptionTimeAgent = "AVG_INTERRUPTION_TIME_AGENT",
        AvgNonTalkTime = "AVG_NON_TALK_TIME",
        AvgQueueAnswerTime = "AVG_QUEUE_ANSWER_TIME",
        AvgTalkTime = "AVG_TALK_TIME",
        AvgTalkTimeAgent = "AVG_TALK_TIME_AGENT",
        AvgTalkTimeCustomer = "AVG_TALK_TIME_CUSTOMER",
        ContactsAbandoned = "CONTACTS_ABANDONED",
        ContactsCreated = "CONTACTS_CREATED",
        ContactsHandled = "CONTACTS_HANDLED",
        ContactsHoldAbandons = "CONTACTS_HOLD_ABANDONS",
        ContactsQueued = "CONTACTS_QUEUED",
        ContactsTransferredOut = "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredOutByAgent = "CONTACTS_TRANSFERRED_OUT_BY_AGENT",
        ContactsTransferredOutFromQueue = "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        MaxQueuedTime = "MAX_QUEUED_TIME",
        ServiceLevel = "SERVICE_LEVEL",
        SumContactsAnsweredInX = "SUM_CONTACTS_ANSWERED_IN_X",
        SumContactsAbandonedInX = "SUM_CONTACTS_ABANDONED_IN_X",
        SumContactsDisconnected = "SUM_CONTACTS_DISCONNECTED",
        SumRetryCallbackAttempts = "SUM_RETRY_CALLBACK_ATTEMPTS",
    }
}

soft_enum! {
    pub enum Statistic {
        Sum = "SUM",
        Max = "MAX",
        Avg = "AVG",
    }
}

soft_enum! {
    /// Unit a metric value is reported in.
    pub enum Unit {
        Seconds = "SECONDS",
        Count = "COUNT",
        Percent = "PERCENT",
    }
}

soft_enum! {
    /// Threshold comparison; only "less than" is documented.
    pub enum Comparison {
        Lt = "LT",
    }
}

soft_enum! {
    pub enum SortOrder {
        Ascending = "ASCENDING",
        Descending = "DESCENDING",
    }
}
